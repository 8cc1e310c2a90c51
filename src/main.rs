use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

use koolbox::banner::{BannerInfo, print_banner, print_session_summary};
use koolbox::commands::{CommandRegistry, CommandResult, SessionInfo};
use koolbox::config::{self, Overrides, Settings};
use koolbox::engine::oracle::OracleEngine;
use koolbox::engine::{Engine, ask_view};
use koolbox::events::EventBus;
use koolbox::model::gemini::{GeminiClient, GeminiImageModel, GeminiTextModel};
use koolbox::render::{self, ImageOptions};
use koolbox::selector::RandomSelector;
use koolbox::server;
use koolbox::session::{Notice, View};
use koolbox::spinner::Spinner;

#[derive(Parser)]
#[command(name = "koolbox", version, about = "Draw a card, ask it anything.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Text model (env: KOOLBOX_TEXT_MODEL)
    #[arg(long, global = true)]
    text_model: Option<String>,

    /// Image model (env: KOOLBOX_IMAGE_MODEL)
    #[arg(long, global = true)]
    image_model: Option<String>,

    /// Directory for rendered images (env: KOOLBOX_IMAGE_DIR)
    #[arg(long)]
    image_dir: Option<PathBuf>,

    /// Open each rendered image in the system viewer
    #[arg(long, default_value_t = false)]
    open_images: bool,

    /// Ask a single question and exit (non-interactive)
    #[arg(short, long)]
    ask: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve `POST /ask` over HTTP
    Serve {
        /// Address to bind (default: 127.0.0.1:$PORT, PORT defaults to 3000)
        #[arg(short, long)]
        bind: Option<String>,
    },
}

const INPUT_PROMPT: &str = "koolbox> ";
const RESULT_PROMPT: &str = "koolbox (/new)> ";
const CONTINUATION_PROMPT: &str = "   ... ";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let serving = matches!(cli.command, Some(Command::Serve { .. }));
    init_tracing(if serving { "info" } else { "warn" });

    let settings = match Settings::load(Overrides {
        text_model: cli.text_model.clone(),
        image_model: cli.image_model.clone(),
        image_dir: cli.image_dir.clone(),
    }) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("🚨 {e}");
            std::process::exit(1);
        }
    };
    tracing::debug!(?settings, "settings resolved");

    let client = GeminiClient::new(&settings.api_base, &settings.api_key);
    let bus = Arc::new(EventBus::default());
    let engine = OracleEngine::new(
        Box::new(RandomSelector),
        Box::new(GeminiTextModel::new(client.clone(), &settings.text_model)),
        Box::new(GeminiImageModel::new(client, &settings.image_model)),
    )
    .with_events(Arc::clone(&bus));

    if let Some(Command::Serve { bind }) = &cli.command {
        let bind = config::bind_address(|key| std::env::var(key).ok(), bind.as_deref())?;
        return server::serve(Arc::new(engine), bind).await;
    }

    let images = ImageOptions {
        dir: settings.image_dir.clone(),
        open: cli.open_images,
    };

    // Single question mode
    if let Some(question) = cli.ask {
        let mut view = View::Input;
        let notices = ask_with_spinner(&engine, &bus, &mut view, &question).await;
        eprint!("{}", render::render_notices(&notices));
        if view.is_input() {
            std::process::exit(1);
        }
        print!("{}", render::render(&view, &images));
        return Ok(());
    }

    print_banner(&BannerInfo {
        text_model: engine.text_model(),
        image_model: engine.image_model(),
        api_key_source: settings.api_key_source,
        image_dir: &settings.image_dir,
    });

    let registry = CommandRegistry::new();
    let mut view = View::Input;
    let mut asked = 0;

    print!("{}", render::render_input());

    // REPL. Async stdin so Ctrl+C is caught at the prompt too.
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        let prompt = if view.is_input() { INPUT_PROMPT } else { RESULT_PROMPT };
        let Some(input) = read_entry(&mut lines, prompt).await? else {
            break;
        };

        let info = SessionInfo {
            text_model: engine.text_model(),
            image_model: engine.image_model(),
            api_key_source: settings.api_key_source,
            view: view.label(),
        };
        match registry.dispatch(&input, &info) {
            CommandResult::Quit => break,
            CommandResult::Handled => continue,
            CommandResult::NewSession => {
                view.new_session();
                print!("{}", render::render_input());
                continue;
            }
            CommandResult::NotACommand => {}
        }

        if input.trim().is_empty() && !view.is_input() {
            continue;
        }

        // No cancellation once an ask has started; it runs to completion.
        let was_input = view.is_input();
        let notices = ask_with_spinner(&engine, &bus, &mut view, &input).await;
        print!("{}", render::render_notices(&notices));
        if was_input && !view.is_input() {
            asked += 1;
            println!();
            print!("{}", render::render(&view, &images));
        }
    }

    print_session_summary(asked);
    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_env("KOOLBOX_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

async fn ask_with_spinner(
    engine: &OracleEngine,
    bus: &EventBus,
    view: &mut View,
    question: &str,
) -> Vec<Notice> {
    let spinner = Spinner::follow("drawing a card", bus.subscribe());
    let notices = ask_view(engine, view, question).await;
    spinner.stop().await;
    notices
}

/// Read one entry from the prompt. Lines ending in `\` continue onto the
/// next line. `None` on EOF or Ctrl+C.
async fn read_entry(lines: &mut Lines<BufReader<Stdin>>, prompt: &str) -> io::Result<Option<String>> {
    let mut entry = String::new();
    let mut prompt = format!("\n{prompt}");

    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => match result? {
                Some(line) => line,
                None => {
                    // Ctrl+D (EOF)
                    println!();
                    return Ok(None);
                }
            },
            _ = tokio::signal::ctrl_c() => {
                println!();
                return Ok(None);
            }
        };

        if !push_line(&mut entry, &line) {
            return Ok(Some(entry));
        }
        prompt = CONTINUATION_PROMPT.to_string();
    }
}

/// Append `line` to `entry`. Returns `true` when the line asks to continue.
fn push_line(entry: &mut String, line: &str) -> bool {
    if !entry.is_empty() {
        entry.push('\n');
    }
    match line.strip_suffix('\\') {
        Some(head) => {
            entry.push_str(head);
            true
        }
        None => {
            entry.push_str(line);
            false
        }
    }
}
