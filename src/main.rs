use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use zcalc::Config;
use zcalc::calculator::{Calculator, KeyError, copy_result, parse_keys};

/// A four-function calculator driven by key sequences.
#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about)]
struct Cli {
    /// Keys to press, e.g. `12+3=` or `7 x 8 =`
    keys: Vec<String>,

    /// Read key sequences from stdin, one line at a time
    #[arg(short, long)]
    interactive: bool,

    /// Print the readout as JSON
    #[arg(long)]
    json: bool,

    /// Copy the final result to the clipboard
    #[arg(long)]
    copy: bool,

    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    let mut calc = Calculator::with_format(config.display_format());

    if cli.interactive {
        run_interactive(&mut calc, cli.json)?;
    } else {
        if !cli.keys.is_empty() {
            let input = cli.keys.join(" ");
            let events = parse_keys(&input).context("Invalid key sequence")?;
            calc.press_all(events);
        }
        print_readout(&calc, cli.json)?;
    }

    if cli.copy || config.behavior.copy_result {
        copy_result(&calc.readout()).context("Failed to copy result")?;
    }

    Ok(())
}

/// What happened to one line of interactive input.
#[derive(Debug, PartialEq, Eq)]
enum LineOutcome {
    /// Keys were applied.
    Pressed,
    /// Blank line.
    Skipped,
    /// The line had a bad key and was not applied.
    Rejected(KeyError),
    /// The user asked to end the session.
    Quit,
}

/// Apply one line of keys. A line with any unknown key leaves the
/// calculator untouched.
fn handle_line(calc: &mut Calculator, line: &str) -> LineOutcome {
    let trimmed = line.trim();

    match trimmed {
        "" => LineOutcome::Skipped,
        "q" | "quit" | "exit" => LineOutcome::Quit,
        _ => match parse_keys(trimmed) {
            Ok(events) => {
                calc.press_all(events);
                LineOutcome::Pressed
            }
            Err(err) => LineOutcome::Rejected(err),
        },
    }
}

fn run_interactive(calc: &mut Calculator, json: bool) -> Result<()> {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;

        match handle_line(calc, &line) {
            LineOutcome::Pressed => print_readout(calc, json)?,
            LineOutcome::Skipped => {}
            LineOutcome::Rejected(err) => warn!(error = %err, "Ignoring line"),
            LineOutcome::Quit => break,
        }
    }

    Ok(())
}

fn print_readout(calc: &Calculator, json: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();

    if json {
        let readout = serde_json::to_string(&calc.readout())?;
        writeln!(stdout, "{}", readout)?;
    } else {
        writeln!(stdout, "{}", calc.formatted_display())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_with_bad_key_leaves_state_untouched() {
        let mut calc = Calculator::new();
        assert_eq!(handle_line(&mut calc, "5+"), LineOutcome::Pressed);

        let outcome = handle_line(&mut calc, "3^2");
        assert_eq!(
            outcome,
            LineOutcome::Rejected(KeyError::UnknownKey {
                key: '^',
                position: 1
            })
        );
        assert_eq!(calc.state().display(), "5");
        assert_eq!(calc.readout().pending.as_deref(), Some("5 +"));
    }

    #[test]
    fn test_quit_commands_end_session() {
        let mut calc = Calculator::new();
        for line in ["q", "quit", "  exit  "] {
            assert_eq!(handle_line(&mut calc, line), LineOutcome::Quit);
        }
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut calc = Calculator::new();
        handle_line(&mut calc, "42");
        assert_eq!(handle_line(&mut calc, ""), LineOutcome::Skipped);
        assert_eq!(handle_line(&mut calc, "   "), LineOutcome::Skipped);
        assert_eq!(calc.state().display(), "42");
    }

    #[test]
    fn test_lines_share_one_session() {
        let mut calc = Calculator::new();
        handle_line(&mut calc, "7 x");
        handle_line(&mut calc, "8 =");
        assert_eq!(calc.formatted_display(), "56");
    }
}
