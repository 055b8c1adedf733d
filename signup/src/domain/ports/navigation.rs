//! Port for moving between the signup view and the display view.
//!
//! Navigation carries the completed [`SessionRecord`] as state, mirroring a
//! client-side router that passes a payload alongside the target path.

use std::fmt;

use thiserror::Error;

use crate::domain::SessionRecord;

/// Addressable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// The two-step signup form.
    Signup,
    /// The page that renders the completed session record.
    Home,
}

impl Route {
    /// Path the view is registered under.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Signup => "/",
            Self::Home => "/home",
        }
    }

    /// Resolve a view from its path.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::UnknownRoute`] when no view is registered
    /// at `path`.
    ///
    /// # Examples
    /// ```
    /// use signup::domain::ports::Route;
    ///
    /// assert_eq!(Route::from_path("/home"), Ok(Route::Home));
    /// assert!(Route::from_path("/profile").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self, NavigationError> {
        match path {
            "/" => Ok(Self::Signup),
            "/home" => Ok(Self::Home),
            other => Err(NavigationError::UnknownRoute {
                path: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Errors raised by navigation adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No view is registered at the requested path.
    #[error("no view is registered at '{path}'")]
    UnknownRoute {
        /// Requested path.
        path: String,
    },
    /// The target view does not take navigation state.
    #[error("the view at '{route}' does not accept navigation state")]
    UnexpectedPayload {
        /// Target view.
        route: Route,
    },
    /// The target view failed to render the payload.
    #[error("the view at '{route}' failed to render: {message}")]
    RenderFailed {
        /// Target view.
        route: Route,
        /// Render error message.
        message: String,
    },
}

/// Client-side navigation primitive.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    /// Show `route`, handing it `record` as navigation state.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError`] when the view cannot take or render the
    /// record.
    fn go_to(&mut self, route: Route, record: SessionRecord) -> Result<(), NavigationError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Route::Signup)]
    #[case(Route::Home)]
    fn paths_resolve_back_to_routes(#[case] route: Route) {
        assert_eq!(Route::from_path(route.path()), Ok(route));
    }

    #[test]
    fn unknown_path_is_reported() {
        let err = Route::from_path("/admin").expect_err("unregistered path");
        assert_eq!(err.to_string(), "no view is registered at '/admin'");
    }
}
