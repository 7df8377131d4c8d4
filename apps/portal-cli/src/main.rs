//! # Portal
//!
//! Terminal front end for the authentication API: log in, register, view the
//! dashboard and log out. The session persists between invocations.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input, Password};

use portal_core::domain::{Redirect, Route};

mod config;
mod error;
mod pages;
mod shell;
mod state;
mod telemetry;

use config::AppConfig;
use error::AppError;
use pages::Page;
use pages::dashboard;
use pages::login::{self, LoginForm};
use pages::register::{self, RegisterForm};
use shell::{Banner, Shell, SubmitButton};
use state::AppState;
use telemetry::TelemetryConfig;

#[derive(Debug, Parser)]
#[command(name = "portal", version, about = "Log in, register and view your dashboard")]
struct Cli {
    /// Base URL of the API (overrides PORTAL_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign in and store the session.
    Login {
        #[arg(long)]
        email: Option<String>,
        /// Prompted for when omitted.
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account.
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "employee")]
        role: String,
        /// Prompted for when omitted.
        #[arg(long)]
        password: Option<String>,
        /// Prompted for when omitted.
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Show the signed-in user from the stored session.
    Dashboard,
    /// Fetch the signed-in user from the server.
    Whoami,
    /// Forget the stored session.
    Logout {
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Change another user's role (admin only).
    ChangeRole {
        #[arg(long)]
        user_id: i64,
        #[arg(long)]
        role: String,
    },
    /// Check that the API is reachable.
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let mut config = AppConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config = config.with_api_url(api_url);
    }

    let state = AppState::new(&config)?;
    let mut shell = Shell::stdout();

    run(cli.command, &state, &mut shell).await
}

async fn run(command: Command, state: &AppState, shell: &mut Shell) -> anyhow::Result<ExitCode> {
    match command {
        Command::Login { email, password } => {
            if let Some(redirect) = login::enter(state).await {
                return navigate(state, shell, redirect).await;
            }

            let email = match email {
                Some(email) => email,
                None => Input::<String>::new()
                    .with_prompt("Email")
                    .allow_empty(true)
                    .interact_text()?,
            };
            let password = match password {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("Password")
                    .allow_empty_password(true)
                    .interact()?,
            };

            let form = LoginForm { email, password };
            let mut button = SubmitButton::login();
            match login::submit(state, &form, &mut button).await {
                Ok(submitted) => {
                    shell.show(&submitted.banner)?;
                    navigate(state, shell, submitted.redirect).await
                }
                Err(e) => fail(shell, e),
            }
        }

        Command::Register {
            first_name,
            last_name,
            username,
            email,
            phone,
            role,
            password,
            confirm_password,
        } => {
            if let Some(redirect) = register::enter(state).await {
                return navigate(state, shell, redirect).await;
            }

            let password = match password {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("Password")
                    .allow_empty_password(true)
                    .interact()?,
            };
            let confirm_password = match confirm_password {
                Some(confirm) => confirm,
                None => Password::new()
                    .with_prompt("Confirm password")
                    .allow_empty_password(true)
                    .interact()?,
            };

            let form = RegisterForm {
                first_name,
                last_name,
                username,
                email,
                phone,
                role,
                password,
                confirm_password,
            };
            let mut button = SubmitButton::register();
            match register::submit(state, &form, &mut button).await {
                Ok(submitted) => {
                    shell.show(&submitted.banner)?;
                    navigate(state, shell, submitted.redirect).await
                }
                Err(e) => fail(shell, e),
            }
        }

        Command::Dashboard => show_dashboard(state, shell).await,

        Command::Whoami => match dashboard::current_user(state).await {
            Ok(Page::Redirect(redirect)) => {
                shell.follow(redirect).await?;
                Ok(ExitCode::FAILURE)
            }
            Ok(Page::Show(view)) => {
                shell.render_dashboard(&view)?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => fail(shell, e),
        },

        Command::Logout { yes } => {
            let confirmed = yes
                || Confirm::new()
                    .with_prompt("Are you sure you want to logout?")
                    .default(false)
                    .interact()?;
            if !confirmed {
                return Ok(ExitCode::SUCCESS);
            }

            let redirect = dashboard::logout(state).await;
            shell.follow(redirect).await?;
            Ok(ExitCode::SUCCESS)
        }

        Command::ChangeRole { user_id, role } => {
            match pages::admin::change_role(state, user_id, &role).await {
                Ok(Page::Redirect(redirect)) => {
                    shell.follow(redirect).await?;
                    Ok(ExitCode::FAILURE)
                }
                Ok(Page::Show(banner)) => {
                    shell.show(&banner)?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => fail(shell, e),
            }
        }

        Command::Health => match state.api.health().await {
            Ok(health) => {
                let text = match health.message {
                    Some(message) => format!("{}: {}", health.status, message),
                    None => health.status,
                };
                shell.show(&Banner::success(text))?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => fail(shell, e.into()),
        },
    }
}

/// Follow a redirect; landing on the dashboard renders it.
async fn navigate(state: &AppState, shell: &mut Shell, redirect: Redirect) -> anyhow::Result<ExitCode> {
    match shell.follow(redirect).await? {
        Route::Dashboard => show_dashboard(state, shell).await,
        Route::Login | Route::Register => Ok(ExitCode::SUCCESS),
    }
}

async fn show_dashboard(state: &AppState, shell: &mut Shell) -> anyhow::Result<ExitCode> {
    match dashboard::load(state).await {
        Ok(Page::Redirect(redirect)) => {
            shell.follow(redirect).await?;
            Ok(ExitCode::FAILURE)
        }
        Ok(Page::Show(Some(view))) => {
            shell.render_dashboard(&view)?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(Page::Show(None)) => Ok(ExitCode::SUCCESS),
        Err(e) => fail(shell, e),
    }
}

fn fail(shell: &mut Shell, err: AppError) -> anyhow::Result<ExitCode> {
    shell.show(&Banner::error(err.to_string()))?;
    Ok(ExitCode::FAILURE)
}
