//! Navigation between the menu and the drawing screen.
//!
//! The drawing session only lives while [`Route::Play`] is showing;
//! leaving it throws the whole [`PadState`] away.

use serde::{Deserialize, Serialize};

use crate::{PadError, PadResult, PadState};

/// A screen of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// The home menu at `/`.
    #[default]
    Menu,
    /// The drawing screen at `/about`.
    Play,
}

impl Route {
    /// URL path for this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Menu => "/",
            Self::Play => "/about",
        }
    }

    /// Strictly match a path.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::UnknownRoute`] for paths with no screen.
    pub fn parse_path(path: &str) -> PadResult<Self> {
        match path.trim_end_matches('/') {
            "" => Ok(Self::Menu),
            "/about" => Ok(Self::Play),
            _ => Err(PadError::UnknownRoute(path.to_string())),
        }
    }

    /// Match a path, falling back to the menu.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        Self::parse_path(path).unwrap_or_else(|err| {
            tracing::debug!("{err}, showing menu");
            Self::Menu
        })
    }
}

/// Tracks the current screen and owns the drawing session.
#[derive(Debug, Default)]
pub struct Router {
    route: Route,
    session: Option<PadState>,
}

impl Router {
    /// Start on the menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on whatever screen `path` names.
    #[must_use]
    pub fn at_path(path: &str) -> Self {
        let mut router = Self::new();
        router.navigate(Route::from_path(path));
        router
    }

    /// Show `route`.
    ///
    /// Entering [`Route::Play`] from elsewhere opens a fresh session;
    /// leaving it drops the session. Returns `true` if the route changed.
    pub fn navigate(&mut self, route: Route) -> bool {
        if route == self.route && (route != Route::Play || self.session.is_some()) {
            return false;
        }
        tracing::info!("Navigating {} -> {}", self.route.path(), route.path());
        self.route = route;
        self.session = match route {
            Route::Play => Some(PadState::new()),
            Route::Menu => None,
        };
        true
    }

    /// The "Play" action.
    pub fn play(&mut self) -> bool {
        self.navigate(Route::Play)
    }

    /// The "Back" action.
    pub fn back(&mut self) -> bool {
        self.navigate(Route::Menu)
    }

    /// The current screen.
    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    /// The drawing session, present only on [`Route::Play`].
    #[must_use]
    pub fn session(&self) -> Option<&PadState> {
        self.session.as_ref()
    }

    /// Mutable access to the drawing session.
    pub fn session_mut(&mut self) -> Option<&mut PadState> {
        self.session.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mode, Point};

    #[test]
    fn test_paths() {
        assert_eq!(Route::from_path("/"), Route::Menu);
        assert_eq!(Route::from_path(""), Route::Menu);
        assert_eq!(Route::from_path("/about"), Route::Play);
        assert_eq!(Route::from_path("/about/"), Route::Play);
        assert_eq!(Route::from_path("/settings"), Route::Menu);
        assert!(Route::parse_path("/settings").is_err());
    }

    #[test]
    fn test_menu_has_no_session() {
        let router = Router::new();
        assert_eq!(router.route(), Route::Menu);
        assert!(router.session().is_none());
    }

    #[test]
    fn test_play_opens_session() {
        let mut router = Router::new();
        assert!(router.play());
        assert_eq!(router.route(), Route::Play);
        assert!(router.session().is_some());
        assert!(!router.play());
    }

    #[test]
    fn test_back_discards_drawing() {
        let mut router = Router::at_path("/about");
        let session = router.session_mut().expect("session");
        session.set_mode(Mode::Circle);
        session.click(Point::new(1.0, 1.0));
        session.pointer_down(Point::new(2.0, 2.0));

        assert!(router.back());
        assert!(router.session().is_none());

        router.play();
        let session = router.session().expect("fresh session");
        assert!(session.scene().is_empty());
        assert_eq!(session.mode(), Mode::Default);
    }
}
