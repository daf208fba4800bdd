//! Options passed from JavaScript when the app is created.

use std::str::FromStr;

use artpad_core::Color;
use artpad_renderer::RendererConfig;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// App options, given as an optional JSON object:
///
/// ```json
/// { "logLevel": "debug", "antiAliasing": true, "background": null }
/// ```
///
/// Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AppOptions {
    /// Console log level: `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    /// Forwarded to [`RendererConfig::anti_aliasing`].
    pub anti_aliasing: bool,
    /// Forwarded to [`RendererConfig::background`].
    pub background: Option<Color>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            anti_aliasing: true,
            background: None,
        }
    }
}

impl AppOptions {
    /// Parse options from JSON; `None` or blank gives the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the log level unknown.
    pub fn from_json(json: Option<&str>) -> AppResult<Self> {
        let options: Self = match json.map(str::trim) {
            None | Some("") => Self::default(),
            Some(text) => serde_json::from_str(text)?,
        };
        options.level()?;
        Ok(options)
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns an error if the level name is unknown.
    pub fn level(&self) -> AppResult<log::Level> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| AppError::Options(format!("unknown log level '{}'", self.log_level)))
    }

    /// Renderer settings derived from these options.
    #[must_use]
    pub fn renderer_config(&self) -> RendererConfig {
        RendererConfig {
            anti_aliasing: self.anti_aliasing,
            background: self.background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_options_use_defaults() {
        assert_eq!(AppOptions::from_json(None).expect("defaults"), AppOptions::default());
        assert_eq!(
            AppOptions::from_json(Some("  ")).expect("defaults"),
            AppOptions::default()
        );
    }

    #[test]
    fn test_partial_options() {
        let options = AppOptions::from_json(Some(r#"{"logLevel": "debug"}"#)).expect("parse");
        assert_eq!(options.level().expect("level"), log::Level::Debug);
        assert!(options.anti_aliasing);
    }

    #[test]
    fn test_background_color_by_name() {
        let options =
            AppOptions::from_json(Some(r#"{"background": "orange", "antiAliasing": false}"#))
                .expect("parse");
        let config = options.renderer_config();
        assert_eq!(config.background, Some(Color::Orange));
        assert!(!config.anti_aliasing);
    }

    #[test]
    fn test_anti_aliasing_reaches_the_surface() {
        use artpad_core::Scene;
        use artpad_renderer::{RecordingSurface, Renderer};

        let options = AppOptions::from_json(Some(r#"{"antiAliasing": false}"#)).expect("parse");
        let mut renderer = Renderer::new(options.renderer_config());
        let mut surface = RecordingSurface::default();
        renderer.redraw(&mut surface, &Scene::new()).expect("redraw");
        assert!(!surface.anti_aliasing());
    }

    #[test]
    fn test_rejects_bad_level() {
        let err = AppOptions::from_json(Some(r#"{"logLevel": "loud"}"#)).unwrap_err();
        assert!(matches!(err, AppError::Options(_)));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(AppOptions::from_json(Some(r#"{"width": 1200}"#)).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(AppOptions::from_json(Some("{ nope")).is_err());
    }
}
