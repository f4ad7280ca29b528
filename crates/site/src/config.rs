use serde::{Deserialize, Serialize};
use tracing::warn;
use viewport::ObserverConfig;

/// `site.json` at the workspace root, embedded at compile time.
pub const BUNDLED_SITE_JSON: &str = include_str!("../../../site.json");

/// Build-time override for [`SiteConfig::under_development`].
pub const UNDER_DEVELOPMENT_ENV: &str = "SITE_UNDER_DEVELOPMENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    Invalid(String),
    InvalidFlag(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "site config is not valid JSON: {msg}"),
            ConfigError::Invalid(msg) => write!(f, "site config rejected: {msg}"),
            ConfigError::InvalidFlag(raw) => write!(
                f,
                "{UNDER_DEVELOPMENT_ENV}={raw:?} is not a boolean (expected true/false)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Page-level configuration.
///
/// Fixed for the lifetime of the build: there is no runtime toggle.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Serve the placeholder screen instead of the portfolio.
    pub under_development: bool,
    pub observer: ObserverConfig,
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.observer.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Applies the raw value of [`UNDER_DEVELOPMENT_ENV`], if one was set.
    pub fn with_flag_override(mut self, raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw else {
            return Ok(self);
        };
        let flag = parse_flag(raw).ok_or_else(|| ConfigError::InvalidFlag(raw.to_string()))?;
        if flag != self.under_development {
            warn!(
                from = self.under_development,
                to = flag,
                "under_development overridden at build time"
            );
        }
        self.under_development = flag;
        Ok(self)
    }

    /// The configuration compiled into this build.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED_SITE_JSON)?
            .with_flag_override(option_env!("SITE_UNDER_DEVELOPMENT"))
    }
}

pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{BUNDLED_SITE_JSON, ConfigError, SiteConfig, parse_flag};
    use pretty_assertions::assert_eq;
    use viewport::ObserverConfig;

    #[test]
    fn bundled_file_parses() {
        let cfg = SiteConfig::from_json(BUNDLED_SITE_JSON).unwrap();
        assert_eq!(cfg.observer, ObserverConfig::default());
    }

    #[test]
    fn empty_object_uses_defaults() {
        let cfg = SiteConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SiteConfig::default());
        assert!(!cfg.under_development);
    }

    #[test]
    fn partial_observer_section_is_merged() {
        let cfg = SiteConfig::from_json(
            r#"{"under_development": true, "observer": {"scroll_top_threshold_px": 120}}"#,
        )
        .unwrap();
        assert!(cfg.under_development);
        assert_eq!(cfg.observer.scroll_top_threshold_px, 120.0);
        assert_eq!(cfg.observer.reveal_threshold, 0.2);
    }

    #[test]
    fn rejects_bad_json_and_bad_values() {
        assert!(matches!(
            SiteConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{"observer": {"reveal_threshold": 2.0}}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn flag_override() {
        let cfg = SiteConfig::default();
        assert!(cfg.clone().with_flag_override(Some("true")).unwrap().under_development);
        assert!(!cfg.clone().with_flag_override(Some("0")).unwrap().under_development);
        assert_eq!(cfg.clone().with_flag_override(None).unwrap(), cfg);
        assert_eq!(
            cfg.with_flag_override(Some("maybe")),
            Err(ConfigError::InvalidFlag("maybe".to_string()))
        );
    }

    #[test]
    fn flag_spellings() {
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag(""), None);
    }
}
