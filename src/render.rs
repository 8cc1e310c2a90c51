//! Draws the page for the current [`View`].

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::ImageFormat;

use crate::model::InlineImage;
use crate::session::{Notice, Session, View};

const RULE: &str = "────────────────────────────────────────";
const PLACEHOLDER: &str = "E.g. How can I improve my focus today?";
const NO_IMAGE: &str = "No image available to display.";

/// Where decoded images are written, and whether to open them.
#[derive(Debug, Clone)]
pub struct ImageOptions {
    pub dir: PathBuf,
    pub open: bool,
}

/// A decoded image that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Render the whole page.
pub fn render(view: &View, images: &ImageOptions) -> String {
    match view {
        View::Input => render_input(),
        View::Result(session) => render_result(session, images),
    }
}

/// The question box.
pub fn render_input() -> String {
    format!("Ask KoolBox… ({PLACEHOLDER})\nEnd a line with \\ to keep typing on the next one.\n")
}

/// Notices, one per line.
pub fn render_notices(notices: &[Notice]) -> String {
    notices.iter().map(|n| format!("  {n}\n")).collect()
}

fn render_result(session: &Session, images: &ImageOptions) -> String {
    let mut out = String::new();

    match session.card() {
        Some(card) => {
            let _ = writeln!(out, "🎴 {}\n", card.title);
            let _ = writeln!(out, "{}", card.content);
        }
        None => {
            let _ = writeln!(out, "🎴 card {} (not in the deck)", session.card_key);
        }
    }

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "Your question: {}", session.question);

    let _ = writeln!(out, "\n🎴 Card Takeaway");
    let _ = writeln!(out, "{}", session.takeaway);

    let _ = writeln!(out, "\n💡 Answer");
    let _ = writeln!(out, "{}", session.answer);

    let _ = writeln!(out);
    match show_image(session.generated_image.as_ref(), images) {
        Ok(shown) => {
            let _ = writeln!(
                out,
                "🖼  Visual Representation ({}×{})\n   {}",
                shown.width,
                shown.height,
                shown.path.display()
            );
        }
        Err(notice) => {
            let _ = writeln!(out, "{notice}");
        }
    }

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "/new to start a new session");
    out
}

/// Decode the generated image, write it out as PNG, and optionally open it.
/// Missing images and bad bytes come back as the notice to show instead.
pub fn show_image(image: Option<&InlineImage>, options: &ImageOptions) -> Result<ShownImage, Notice> {
    let Some(image) = image.filter(|i| !i.data.is_empty()) else {
        return Err(Notice::warning(NO_IMAGE));
    };

    let decoded = image::load_from_memory(&image.data)
        .map_err(|e| Notice::error(format!("Error displaying image: {e}")))?;

    let path = write_png(&decoded, &options.dir)
        .map_err(|e| Notice::error(format!("Error displaying image: {e:#}")))?;
    tracing::debug!(path = %path.display(), "image written");

    if options.open {
        // Headless sessions have no viewer; the path is printed either way.
        let _ = open::that(&path);
    }

    Ok(ShownImage {
        path,
        width: decoded.width(),
        height: decoded.height(),
    })
}

fn write_png(image: &image::DynamicImage, dir: &Path) -> anyhow::Result<PathBuf> {
    use anyhow::Context;

    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(format!("koolbox-{}.png", timestamp_millis()));
    image
        .save_with_format(&path, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

fn timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
