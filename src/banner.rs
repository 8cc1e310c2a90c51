//! Startup banner and goodbye line.

use std::path::Path;

use crate::consts::{AUTHOR, HOMEPAGE, REPO};
use crate::deck::DECK_SIZE;

/// What the banner shows about this run.
pub struct BannerInfo<'a> {
    pub text_model: &'a str,
    pub image_model: &'a str,
    pub api_key_source: &'a str,
    pub image_dir: &'a Path,
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║            🎴  K O O L B O X          ║
   ║   draw a card, ask it anything        ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   home      {}
   repo      {}
   deck      {} cards
   text      {}
   image     {}
   key       {} ✓
   images    {}

   type a question, /help for commands
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        HOMEPAGE,
        REPO,
        DECK_SIZE,
        info.text_model,
        info.image_model,
        info.api_key_source,
        info.image_dir.display(),
    );
}

/// Print how many questions were asked, then say goodbye.
pub fn print_session_summary(asked: usize) {
    match asked {
        0 => {}
        1 => println!("1 card drawn."),
        n => println!("{n} cards drawn."),
    }
    println!("goodbye.");
}
