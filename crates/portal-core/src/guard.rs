//! Login-state gating for pages.

use crate::domain::{Redirect, Route};
use crate::session::SessionStore;

/// Protected pages send unauthenticated visitors to the login page.
pub async fn protect_page(session: &SessionStore) -> Option<Redirect> {
    if session.is_authenticated().await {
        None
    } else {
        Some(Redirect::immediate(Route::Login))
    }
}

/// Login and register pages send authenticated visitors to the dashboard.
pub async fn redirect_if_logged_in(session: &SessionStore) -> Option<Redirect> {
    if session.is_authenticated().await {
        Some(Redirect::immediate(Route::Dashboard))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserProfile;
    use crate::session::tests::MapStorage;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_protect_page() {
        let session = SessionStore::new(Arc::new(MapStorage::default()));
        assert_eq!(
            protect_page(&session).await,
            Some(Redirect::immediate(Route::Login))
        );

        session.set_session("tok", &UserProfile::default()).await;
        assert_eq!(protect_page(&session).await, None);
    }

    #[tokio::test]
    async fn test_redirect_if_logged_in() {
        let session = SessionStore::new(Arc::new(MapStorage::default()));
        assert_eq!(redirect_if_logged_in(&session).await, None);

        session.set_session("tok", &UserProfile::default()).await;
        assert_eq!(
            redirect_if_logged_in(&session).await,
            Some(Redirect::immediate(Route::Dashboard))
        );
    }
}
