//! Startup settings: `.env`, environment variables, then CLI flags.
//!
//! Resolution is a pure function over an env lookup so tests never touch the
//! real process environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::consts::{
    API_KEY_ENV, API_KEY_FALLBACK_ENV, DEFAULT_API_BASE, DEFAULT_IMAGE_MODEL, DEFAULT_PORT,
    DEFAULT_TEXT_MODEL, default_image_dir,
};
use crate::error::ConfigError;

/// `.env` files tried in order; the first one that loads wins.
const ENV_FILES: &[&str] = &[".env", "../.env"];

/// Values given on the command line. They beat the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub text_model: Option<String>,
    pub image_model: Option<String>,
    pub image_dir: Option<PathBuf>,
}

/// Everything the app needs to talk to the models.
#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    /// Which variable the key came from.
    pub api_key_source: &'static str,
    pub api_base: String,
    pub text_model: String,
    pub image_model: String,
    pub image_dir: PathBuf,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("api_key_source", &self.api_key_source)
            .field("api_base", &self.api_base)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("image_dir", &self.image_dir)
            .finish()
    }
}

impl Settings {
    /// Load `.env`, then resolve against the process environment.
    pub fn load(overrides: Overrides) -> Result<Self, ConfigError> {
        load_dotenv();
        Self::resolve(|key| std::env::var(key).ok(), overrides)
    }

    /// Resolve settings from `lookup`. A missing or blank API key is fatal.
    pub fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        overrides: Overrides,
    ) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let (api_key, api_key_source) = match non_empty(API_KEY_ENV) {
            Some(key) => (key, API_KEY_ENV),
            None => match non_empty(API_KEY_FALLBACK_ENV) {
                Some(key) => (key, API_KEY_FALLBACK_ENV),
                None => return Err(ConfigError::MissingApiKey),
            },
        };

        Ok(Self {
            api_key,
            api_key_source,
            api_base: non_empty("GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            text_model: overrides
                .text_model
                .or_else(|| non_empty("KOOLBOX_TEXT_MODEL"))
                .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            image_model: overrides
                .image_model
                .or_else(|| non_empty("KOOLBOX_IMAGE_MODEL"))
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            image_dir: overrides
                .image_dir
                .or_else(|| non_empty("KOOLBOX_IMAGE_DIR").map(PathBuf::from))
                .unwrap_or_else(default_image_dir),
        })
    }
}

/// Address for `koolbox serve`: the flag if given, else `127.0.0.1:$PORT`.
pub fn bind_address(
    lookup: impl Fn(&str) -> Option<String>,
    flag: Option<&str>,
) -> Result<SocketAddr, ConfigError> {
    if let Some(bind) = flag {
        return bind
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind.to_string()));
    }
    let port = match lookup("PORT").filter(|p| !p.trim().is_empty()) {
        Some(port) => port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidBind(format!("127.0.0.1:{port}")))?,
        None => DEFAULT_PORT,
    };
    Ok(SocketAddr::from(([127, 0, 0, 1], port)))
}

fn load_dotenv() {
    for path in ENV_FILES {
        if dotenvy::from_path(path).is_ok() {
            tracing::info!("loaded .env from {}", path);
            return;
        }
    }
    tracing::debug!("no .env file found, using the environment only");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_key_is_fatal() {
        let err = Settings::resolve(env(&[]), Overrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = Settings::resolve(env(&[("GEMINI_API_KEY", "   ")]), Overrides::default());
        assert!(matches!(err, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn defaults_apply() {
        let settings = Settings::resolve(env(&[("GEMINI_API_KEY", "k1")]), Overrides::default()).unwrap();
        assert_eq!(settings.api_key, "k1");
        assert_eq!(settings.api_key_source, "GEMINI_API_KEY");
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        assert_eq!(settings.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(settings.image_model, DEFAULT_IMAGE_MODEL);
        assert_eq!(settings.image_dir, default_image_dir());
    }

    #[test]
    fn google_key_is_fallback() {
        let settings = Settings::resolve(env(&[("GOOGLE_API_KEY", "g")]), Overrides::default()).unwrap();
        assert_eq!(settings.api_key, "g");
        assert_eq!(settings.api_key_source, "GOOGLE_API_KEY");
    }

    #[test]
    fn gemini_key_wins_over_google_key() {
        let settings = Settings::resolve(
            env(&[("GEMINI_API_KEY", "gem"), ("GOOGLE_API_KEY", "goo")]),
            Overrides::default(),
        )
        .unwrap();
        assert_eq!(settings.api_key, "gem");
    }

    #[test]
    fn env_overrides_models_and_base() {
        let settings = Settings::resolve(
            env(&[
                ("GEMINI_API_KEY", "k"),
                ("GEMINI_API_BASE", "http://localhost:9000/v1beta/"),
                ("KOOLBOX_TEXT_MODEL", "text-x"),
                ("KOOLBOX_IMAGE_MODEL", "image-x"),
                ("KOOLBOX_IMAGE_DIR", "/tmp/kb"),
            ]),
            Overrides::default(),
        )
        .unwrap();
        assert_eq!(settings.api_base, "http://localhost:9000/v1beta");
        assert_eq!(settings.text_model, "text-x");
        assert_eq!(settings.image_model, "image-x");
        assert_eq!(settings.image_dir, PathBuf::from("/tmp/kb"));
    }

    #[test]
    fn flags_beat_env() {
        let settings = Settings::resolve(
            env(&[("GEMINI_API_KEY", "k"), ("KOOLBOX_TEXT_MODEL", "from-env")]),
            Overrides {
                text_model: Some("from-flag".to_string()),
                image_model: None,
                image_dir: Some(PathBuf::from("/flag/dir")),
            },
        )
        .unwrap();
        assert_eq!(settings.text_model, "from-flag");
        assert_eq!(settings.image_model, DEFAULT_IMAGE_MODEL);
        assert_eq!(settings.image_dir, PathBuf::from("/flag/dir"));
    }

    #[test]
    fn debug_redacts_key() {
        let settings = Settings::resolve(env(&[("GEMINI_API_KEY", "secret-key")]), Overrides::default()).unwrap();
        let shown = format!("{settings:?}");
        assert!(!shown.contains("secret-key"));
        assert!(shown.contains("redacted"));
    }

    #[test]
    fn bind_defaults_to_port_3000() {
        let addr = bind_address(env(&[]), None).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn bind_uses_port_env() {
        let addr = bind_address(env(&[("PORT", "8080")]), None).unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn bind_flag_wins() {
        let addr = bind_address(env(&[("PORT", "8080")]), Some("0.0.0.0:9999")).unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:9999");
    }

    #[test]
    fn bad_bind_is_rejected() {
        assert!(matches!(
            bind_address(env(&[]), Some("nope")),
            Err(ConfigError::InvalidBind(_))
        ));
        assert!(matches!(
            bind_address(env(&[("PORT", "http")]), None),
            Err(ConfigError::InvalidBind(_))
        ));
    }
}
