//! countrybox - type into a simulated text field and watch suggestions appear.
//!
//! Each line read from stdin is typed one character at a time, with a key
//! release per character. Suggestions print once typing pauses for the popup
//! delay. Commands:
//!
//! - `:pick N`  commit the Nth shown suggestion
//! - `:clear`   empty the field
//! - `:quit`    exit

mod console;
mod countries;

use anyhow::Result;
use autocomplete_core::{AutocompleteBox, Config, KeyEvent, SearchMode, SuggestionDisplay, TextField};
use clap::Parser;
use console::{ConsoleField, ConsolePopup};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::LocalSet;

#[derive(Parser, Debug)]
#[command(name = "countrybox", about = "Debounced autocomplete over country names")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search mode: contains | starts_with
    #[arg(long)]
    mode: Option<SearchMode>,

    /// Popup delay in seconds (0.0 - 1.0)
    #[arg(long)]
    delay: Option<f32>,

    /// Word list to use instead of the built-in countries (one per line)
    #[arg(long)]
    words: Option<PathBuf>,

    /// Simulated time between keystrokes, in milliseconds
    #[arg(long, default_value_t = 80)]
    keystroke_ms: u64,
}

enum Command {
    Pick(usize),
    Clear,
    Quit,
    Type(String),
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix(":pick") {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return Command::Pick(rest.trim().parse().unwrap_or(0));
        }
    }
    match trimmed {
        ":clear" => Command::Clear,
        ":quit" | ":q" => Command::Quit,
        _ => Command::Type(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_toml(path)
            .map_err(|e| anyhow::anyhow!("failed to load config {}: {}", path.display(), e))?,
        None => Config::default(),
    };
    if let Some(mode) = args.mode {
        config.set_search_mode(mode);
    }
    if let Some(delay) = args.delay {
        config.set_popup_delay(delay);
        if config.popup_delay != delay {
            tracing::warn!(delay, "popup delay must be within 0.0-1.0, keeping {}", config.popup_delay);
        }
    }
    Ok(config)
}

async fn run(args: Args) -> Result<()> {
    let config = build_config(&args)?;
    let words: Vec<String> = match &args.words {
        Some(path) => countries::load_word_list(path)?,
        None => countries::COUNTRIES.iter().map(|s| s.to_string()).collect(),
    };

    let ac = AutocompleteBox::with_config(ConsoleField::new(), ConsolePopup::new(), words, &config);
    let keystroke = Duration::from_millis(args.keystroke_ms);

    println!(
        "countrybox: {} entries, mode {}, delay {:.2}s",
        ac.items().len(),
        ac.search_mode(),
        ac.popup_delay()
    );
    println!("Type text and press Enter. Commands: :pick N, :clear, :quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Command::Quit => break,
            Command::Clear => {
                ac.cancel_pending();
                ac.field().clear();
                ac.display().clear();
                ac.menu_dismissed();
            }
            Command::Pick(n) => {
                if !ac.display().pick(n) {
                    println!("  no suggestion #{} on screen", n);
                }
            }
            Command::Type(text) => {
                for ch in text.chars() {
                    ac.field().type_char(ch);
                    ac.on_key_up(KeyEvent::from(ch));
                    tokio::time::sleep(keystroke).await;
                }
                tracing::debug!(field = %ac.field().text(), "line typed");
            }
        }
    }

    // Let a last pending cycle print before exiting
    if ac.has_pending() {
        tokio::time::sleep(Duration::from_secs_f32(ac.popup_delay()) + keystroke).await;
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let local = LocalSet::new();
    local.block_on(&runtime, run(args))
}
