//! Path-keyed navigator connecting the signup form to the display page.

use tracing::{debug, warn};

use crate::domain::SessionRecord;
use crate::domain::ports::{NavigationError, Navigator, Route, SessionDisplay};

/// Navigator with two registered views: the signup form at `/` and the
/// display page at `/home`.
///
/// Only the display page accepts a session record. Rendering happens inside
/// [`Navigator::go_to`], so a record is never left pending.
#[derive(Debug)]
pub struct Router<D> {
    display: D,
    current: Route,
}

impl<D: SessionDisplay> Router<D> {
    /// Start on the signup form, rendering records through `display`.
    #[must_use]
    pub const fn new(display: D) -> Self {
        Self {
            display,
            current: Route::Signup,
        }
    }

    /// View shown most recently.
    #[must_use]
    pub const fn current(&self) -> Route {
        self.current
    }

    /// Navigate by path instead of by [`Route`].
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::UnknownRoute`] for unregistered paths, and
    /// otherwise whatever [`Navigator::go_to`] returns.
    pub fn navigate_path(
        &mut self,
        path: &str,
        record: SessionRecord,
    ) -> Result<(), NavigationError> {
        let route = Route::from_path(path)?;
        self.go_to(route, record)
    }

    /// Give up the router, returning the display adapter.
    #[must_use]
    pub fn into_display(self) -> D {
        self.display
    }
}

impl<D: SessionDisplay> Navigator for Router<D> {
    fn go_to(&mut self, route: Route, record: SessionRecord) -> Result<(), NavigationError> {
        match route {
            Route::Signup => Err(NavigationError::UnexpectedPayload { route }),
            Route::Home => {
                self.display.render(&record).map_err(|err| {
                    warn!(%route, error = %err, "display page failed to render");
                    NavigationError::RenderFailed {
                        route,
                        message: err.to_string(),
                    }
                })?;
                debug!(%route, "navigated");
                self.current = route;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{DisplayError, MockSessionDisplay};
    use crate::domain::{CredentialInput, ProfileInput};

    fn record() -> SessionRecord {
        SessionRecord::new(
            CredentialInput::new("johndoe45", "a@b.com", "secret1"),
            ProfileInput::default(),
        )
    }

    #[test]
    fn home_renders_the_record() {
        let mut display = MockSessionDisplay::new();
        display
            .expect_render()
            .withf(|rendered| *rendered == record())
            .times(1)
            .returning(|_| Ok(()));
        let mut router = Router::new(display);
        assert_eq!(router.current(), Route::Signup);

        router.go_to(Route::Home, record()).expect("home accepts records");

        assert_eq!(router.current(), Route::Home);
    }

    #[test]
    fn signup_view_rejects_a_payload() {
        let mut router = Router::new(MockSessionDisplay::new());

        let err = router
            .go_to(Route::Signup, record())
            .expect_err("signup takes no state");

        assert_eq!(
            err,
            NavigationError::UnexpectedPayload {
                route: Route::Signup,
            }
        );
        assert_eq!(router.current(), Route::Signup);
    }

    #[test]
    fn render_failure_keeps_the_current_view() {
        let mut display = MockSessionDisplay::new();
        display.expect_render().times(1).returning(|_| {
            Err(DisplayError::Io {
                message: "disk full".to_owned(),
            })
        });
        let mut router = Router::new(display);

        let err = router
            .go_to(Route::Home, record())
            .expect_err("display fails");

        assert_eq!(
            err.to_string(),
            "the view at '/home' failed to render: failed to write session record: disk full"
        );
        assert_eq!(router.current(), Route::Signup);
    }

    #[test]
    fn unknown_paths_are_rejected_before_rendering() {
        let mut router = Router::new(MockSessionDisplay::new());

        let err = router
            .navigate_path("/settings", record())
            .expect_err("no such view");

        assert_eq!(
            err,
            NavigationError::UnknownRoute {
                path: "/settings".to_owned(),
            }
        );
    }

    #[test]
    fn paths_reach_the_display_page() {
        let mut display = MockSessionDisplay::new();
        display.expect_render().times(1).returning(|_| Ok(()));
        let mut router = Router::new(display);

        router
            .navigate_path("/home", record())
            .expect("home is registered");

        assert_eq!(router.current(), Route::Home);
    }
}
