//! Terminal shell - performs what page handlers ask for: printing banners and
//! views, and following redirects after their delay.

mod banner;
mod submit;

use std::io::{self, Write};

use portal_core::domain::{Redirect, Route};

use crate::pages::dashboard::DashboardView;

pub use banner::Banner;
pub use submit::SubmitButton;

pub struct Shell<W = io::Stdout> {
    out: W,
}

impl Shell<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Shell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn show(&mut self, banner: &Banner) -> io::Result<()> {
        writeln!(self.out, "{}", banner)
    }

    /// Wait out the redirect delay, then announce the new page.
    ///
    /// The dashboard is rendered by the caller; login and register only get a
    /// hint, since they need fresh input.
    pub async fn follow(&mut self, redirect: Redirect) -> io::Result<Route> {
        if !redirect.delay.is_zero() {
            tokio::time::sleep(redirect.delay).await;
        }
        tracing::debug!(route = %redirect.route, "Following redirect");

        match redirect.route {
            Route::Login => writeln!(self.out, "→ {}: run `portal login` to sign in", redirect.route)?,
            Route::Register => writeln!(
                self.out,
                "→ {}: run `portal register` to create an account",
                redirect.route
            )?,
            Route::Dashboard => writeln!(self.out, "→ {}", redirect.route)?,
        }
        Ok(redirect.route)
    }

    pub fn render_dashboard(&mut self, view: &DashboardView) -> io::Result<()> {
        writeln!(self.out, "{}", view.name)?;
        writeln!(self.out, "  Username: {}", view.username)?;
        writeln!(self.out, "  Email:    {}", view.email)?;
        writeln!(self.out, "  Role:     [{}]", view.role_badge)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn output(shell: Shell<Vec<u8>>) -> String {
        String::from_utf8(shell.into_inner()).unwrap()
    }

    #[test]
    fn test_banner_prefixes() {
        let mut shell = Shell::new(Vec::new());
        shell.show(&Banner::error("Passwords do not match")).unwrap();
        shell.show(&Banner::success("Login successful! Redirecting...")).unwrap();

        assert_eq!(
            output(shell),
            "⚠️ Passwords do not match\n✅ Login successful! Redirecting...\n"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_follow_waits_for_delay() {
        let mut shell = Shell::new(Vec::new());
        let start = tokio::time::Instant::now();

        let route = shell
            .follow(Redirect::after(Route::Dashboard, Duration::from_secs(1)))
            .await
            .unwrap();

        assert_eq!(route, Route::Dashboard);
        assert!(start.elapsed() >= Duration::from_secs(1));
        assert_eq!(output(shell), "→ dashboard.html\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_redirect_does_not_wait() {
        let mut shell = Shell::new(Vec::new());
        let start = tokio::time::Instant::now();

        shell.follow(Redirect::immediate(Route::Login)).await.unwrap();

        assert_eq!(start.elapsed(), Duration::ZERO);
        assert!(output(shell).contains("portal login"));
    }

    #[test]
    fn test_render_dashboard() {
        let mut shell = Shell::new(Vec::new());
        shell
            .render_dashboard(&DashboardView {
                name: "Jane Doe".into(),
                username: "jdoe".into(),
                email: "jane@example.com".into(),
                role_badge: "ADMIN".into(),
            })
            .unwrap();

        let out = output(shell);
        assert!(out.starts_with("Jane Doe\n"));
        assert!(out.contains("Role:     [ADMIN]"));
    }
}
