//! Interactive dotmap explorer.
//!
//! Reads one command per line from stdin (or a script file) and redraws the
//! dotmap after every change. Type `help` for the command list.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use dotmap::command::HELP;
use dotmap::io_utils::{dotmap_cli_error, io_cli_error, simple_cli_error};
use dotmap::render::{render_screen, render_word_list, SAFETY_NOTICE};
use dotmap::{Command, Config, DotmapError, SelectionSession, Wordlist};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "dotmap")]
#[command(version)]
#[command(about = "Explore how BIP-39 words map to 11-bit dotmaps")]
struct Args {
    /// Replay commands from a file instead of reading stdin
    #[arg(long)]
    script: Option<PathBuf>,
    /// Rewrite the typed word whenever the bits are edited directly
    #[arg(long)]
    sync_input: bool,
    /// Print the session as JSON instead of the text screen
    #[arg(long)]
    json: bool,
    /// Skip the start-up notice
    #[arg(short, long)]
    quiet: bool,
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if !args.quiet {
        eprintln!("{SAFETY_NOTICE}");
    }

    let config = Config {
        sync_input_on_toggle: args.sync_input,
    };
    let mut session = SelectionSession::with_config(Wordlist::english(), config);
    tracing::info!(words = session.wordlist().len(), "session started");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.script {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| io_cli_error("reading script", path, e))?;
            if text.trim().is_empty() {
                return Err(simple_cli_error("script has no commands").into());
            }
            for (n, line) in text.lines().enumerate() {
                let keep_going = step(&mut session, line, args.json, &mut out)
                    .map_err(|e| dotmap_cli_error(&format!("line {}", n + 1), e))?;
                if !keep_going {
                    break;
                }
            }
        }
        None => {
            let interactive = io::stdin().is_terminal();
            if interactive {
                writeln!(out, "{}", render_screen(&session))?;
            }
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut raw = Vec::new();
            loop {
                if interactive {
                    write!(out, "> ")?;
                    out.flush()?;
                }
                raw.clear();
                if input.read_until(b'\n', &mut raw)? == 0 {
                    break;
                }
                let Ok(line) = std::str::from_utf8(&raw) else {
                    let err = DotmapError::Command("line is not valid UTF-8".into());
                    eprintln!("{}", dotmap_cli_error("input", err));
                    continue;
                };
                let line = line.trim_end_matches(['\n', '\r']);
                match step(&mut session, line, args.json, &mut out) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(DotmapError::Io(e)) => return Err(e.into()),
                    Err(e) => eprintln!("{}", dotmap_cli_error("input", e)),
                }
            }
        }
    }

    out.flush()?;
    tracing::info!(committed = session.committed_words().len(), "session ended");
    Ok(())
}

/// Parse and run one line, then print the result. Returns `false` on quit.
fn step<W: Write>(
    session: &mut SelectionSession,
    line: &str,
    json: bool,
    out: &mut W,
) -> Result<bool, DotmapError> {
    if line.trim_start().starts_with('#') {
        return Ok(true);
    }
    let command: Command = line.parse()?;
    let shown = command.clone();
    if !command.execute(session) {
        return Ok(false);
    }

    if json {
        if matches!(shown, Command::Help) {
            eprintln!("{HELP}");
        } else if shown.mutates() || matches!(shown, Command::Show | Command::List) {
            serde_json::to_writer(&mut *out, &session.view())?;
            writeln!(out)?;
        }
        return Ok(true);
    }

    match shown {
        Command::Help => writeln!(out, "{HELP}")?,
        Command::List => writeln!(out, "{}", render_word_list(session))?,
        _ => writeln!(out, "{}\n", render_screen(session))?,
    }
    Ok(true)
}
