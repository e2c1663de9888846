use clap::Parser;
use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use left_pad::{io_utils::CliError, parse_pad_char, PadConfig};

/// Left-pad every line of a text file (or stdin) to a fixed width.
#[derive(Parser)]
#[command(name = "leftpad", version)]
struct Args {
    /// Input file, `-` or absent for stdin
    input: Option<PathBuf>,
    /// Target width in characters
    #[arg(short, long)]
    width: usize,
    /// Fill character
    #[arg(short, long, default_value = " ")]
    fill: String,
    /// Largest width accepted
    #[arg(long, default_value_t = 1 << 20)]
    max_width: usize,
    /// Output file, stdout when absent
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Emit a JSON document instead of raw lines
    #[arg(long)]
    json: bool,
    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    width: usize,
    fill: char,
    lines: &'a [String],
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn read_input(input: Option<&Path>) -> Result<String, CliError> {
    match input {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|e| CliError::file("reading input file", path, e))
        }
        _ => io::read_to_string(io::stdin().lock())
            .map_err(|e| CliError::stream("reading", "stdin", e)),
    }
}

/// Split text into lines, dropping `\n`, `\r\n` and a trailing lone `\r`.
fn input_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(|line| line.strip_suffix('\r').unwrap_or(line))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let fill = parse_pad_char(&args.fill).map_err(|e| CliError::pad("bad --fill", e))?;
    let config = PadConfig::new(args.width)
        .with_pad_char(fill)
        .with_max_width(args.max_width);

    let text = read_input(args.input.as_deref())?;
    let lines = input_lines(&text)
        .map(|line| config.try_pad(line).map(Cow::into_owned))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CliError::pad("padding failed", e))?;
    log::debug!("padded {} lines to width {}", lines.len(), config.width);

    let mut rendered = if args.json {
        serde_json::to_string_pretty(&Report {
            width: config.width,
            fill,
            lines: &lines,
        })?
    } else {
        lines.join("\n")
    };
    if !lines.is_empty() || args.json {
        rendered.push('\n');
    }

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .map_err(|e| CliError::file("writing output file", path, e))?,
        None => io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .map_err(|e| CliError::stream("writing", "stdout", e))?,
    }
    Ok(())
}
