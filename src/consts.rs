//! Project-wide constants.

use std::path::PathBuf;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Default Gemini model used to read the card and answer the question.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash-preview-05-20";

/// Default Gemini model used to illustrate the answer.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";

/// Default Gemini REST base URL.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Primary environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Fallback environment variable holding the API key.
pub const API_KEY_FALLBACK_ENV: &str = "GOOGLE_API_KEY";

/// Default port for `koolbox serve`.
pub const DEFAULT_PORT: u16 = 3000;

/// Default directory for rendered images: `$TMPDIR/koolbox`.
pub fn default_image_dir() -> PathBuf {
    std::env::temp_dir().join("koolbox")
}
