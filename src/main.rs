//! Terminal keypad for calcpad.
//!
//! Run with: cargo run -- [--keys "6 + 3 Enter"]

use anyhow::{Context, Result};
use calcpad::session::RecordingSink;
use calcpad::{Display, DisplaySink, Input, Keypad, Session, Settings};
use clap::Parser;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

const DISPLAY_WIDTH: usize = 24;

#[derive(Parser, Debug)]
#[command(name = "calcpad", version, about = "Keypad calculator for the terminal")]
struct Cli {
    /// Settings file (defaults to ./calcpad.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Compute immediately instead of waiting for the animation delay
    #[arg(long)]
    no_delay: bool,

    /// Run these keys and print the final display, e.g. "12 + 3 Enter"
    #[arg(long, value_name = "KEYS")]
    keys: Option<String>,
}

/// Sink printing both display slots, right-aligned like a keypad screen.
struct TerminalSink;

impl DisplaySink for TerminalSink {
    fn render(&mut self, display: &Display) {
        print_display(display);
    }

    fn set_calculating(&mut self, calculating: bool) {
        if calculating {
            println!("{:>width$}", "…", width = DISPLAY_WIDTH);
        }
    }
}

fn print_display(display: &Display) {
    println!("{:>width$}", display.previous, width = DISPLAY_WIDTH);
    println!("{:>width$}", display.current, width = DISPLAY_WIDTH);
}

/// Split a typed token into key names.
///
/// Whole tokens that name a key (`Enter`, `7`, `*`) are kept; anything else
/// is read one character at a time so `12+3=` works.
fn expand_token(token: &str) -> Vec<String> {
    if Input::from_key(token).is_some() {
        vec![token.to_string()]
    } else {
        token.chars().map(String::from).collect()
    }
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_keys(settings: &Settings, keys: &str) {
    let mut session = Session::new(RecordingSink::new(), settings);
    for key in keys.split_whitespace().flat_map(expand_token) {
        session.press_key(&key).await;
    }
    print_display(&session.display());
}

async fn run_interactive(settings: &Settings) -> Result<()> {
    let keypad = Keypad::standard();
    println!("{}", keypad.render_text(5));
    println!("Type keys (digits, + - * / %, Enter, Backspace, Escape), 'keypad' or 'quit'.");

    let mut session = Session::new(TerminalSink, settings);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        match line.trim() {
            "quit" | "exit" => break,
            "keypad" => {
                println!("{}", keypad.render_text(5));
                continue;
            }
            _ => {}
        }
        for key in line.split_whitespace().flat_map(expand_token) {
            session.press_key(&key).await;
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    if cli.no_delay || cli.keys.is_some() {
        settings.compute_delay_ms = 0;
    }
    init_tracing(&settings);

    match cli.keys {
        Some(keys) => run_keys(&settings, &keys).await,
        None => run_interactive(&settings).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_stay_whole() {
        assert_eq!(expand_token("Enter"), vec!["Enter"]);
        assert_eq!(expand_token("7"), vec!["7"]);
    }

    #[test]
    fn other_tokens_split_into_characters() {
        assert_eq!(expand_token("12+3="), vec!["1", "2", "+", "3", "="]);
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["calcpad", "--no-delay", "--keys", "1 + 1 ="]);
        assert!(cli.no_delay);
        assert_eq!(cli.keys.as_deref(), Some("1 + 1 ="));
        assert!(cli.config.is_none());
    }
}
