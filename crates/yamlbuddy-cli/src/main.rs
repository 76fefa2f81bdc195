use std::fs::File;
use std::io::{self, IsTerminal, Read, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "yamlbuddy",
    about = "Check YAML syntax and convert YAML to JSON",
    version
)]
struct Args {
    /// Convert to JSON
    #[arg(long)]
    json: bool,

    /// Check syntax
    #[arg(long)]
    check: bool,

    /// Input file (defaults to stdin)
    #[arg(long = "in", value_name = "PATH")]
    in_file: Option<PathBuf>,

    /// Input file, used when --in is not given
    input: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Parse only; failures are reported through the exit status.
    Validate,
    /// Parse and report success on stderr.
    Check,
    /// Parse, normalize and print JSON.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone)]
struct Config {
    mode: Mode,
    input: Input,
    options: yamlbuddy::Options,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let mode = if args.json {
            Mode::Json
        } else if args.check {
            Mode::Check
        } else {
            Mode::Validate
        };
        let input = match args.in_file.or(args.input) {
            Some(path) => Input::File(path),
            None => Input::Stdin,
        };
        Self {
            mode,
            input,
            options: yamlbuddy::Options::default(),
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let config = Config::from(Args::parse());
    run(config, stdout().lock())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .compact()
        .init();
}

fn read_input(input: &Input) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match input {
        Input::File(path) => {
            let mut f = File::open(path).with_context(|| {
                format!("could not open input file {}", path.display())
            })?;
            f.read_to_end(&mut buf).context("error reading input")?;
        }
        Input::Stdin => {
            let stdin = stdin();
            if stdin.is_terminal() {
                info!("reading from stdin");
            }
            stdin.lock().read_to_end(&mut buf).context("error reading input")?;
        }
    }
    debug!(source = ?input, bytes = buf.len(), "read input");
    Ok(buf)
}

fn run<W: Write>(config: Config, mut out: W) -> Result<()> {
    let body = read_input(&config.input)?;
    if body.is_empty() {
        debug!("empty input, nothing to do");
        return Ok(());
    }

    let value = yamlbuddy::parse::from_slice(&body, &config.options).context("error parsing")?;

    match config.mode {
        Mode::Validate => {}
        Mode::Check => info!("syntax ok"),
        Mode::Json => {
            let json = yamlbuddy::json::to_string_pretty(&value, &config.options)
                .context("error converting to json")?;
            writeln!(out, "{}", json).context("error writing result")?;
            out.flush().context("error writing result")?;
        }
    }
    Ok(())
}
