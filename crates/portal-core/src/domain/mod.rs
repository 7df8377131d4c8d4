//! Domain entities - the core client-side objects.

mod navigation;
mod session;
mod user;

pub use navigation::{Redirect, Route};
pub use session::Session;
pub use user::{Role, UserProfile};
