//! Interactive debugger for the alusim 8-bit ALU machine.
//!
//! This binary is a thin line-oriented front end over `alusim_core`. It performs:
//! 1. **Setup:** Loads JSON configuration, applies command-line overrides, and preloads a program.
//! 2. **Command loop:** Reads commands from stdin or a script file and applies them to the simulator.
//! 3. **Display:** Prints registers, the program counter, and a disassembly window after state changes.

mod render;

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use alusim_core::config::Config;
use alusim_core::sim::{Command, Response, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "alusim",
    author,
    version,
    about = "Step debugger for a four-instruction 8-bit ALU machine",
    long_about = "Step debugger for a four-instruction 8-bit ALU machine.\n\nCommands: step, run, pause, reset, back, load <path>, set <addr> <mnemonic> $d, $s1, $s2, show, dump, stats, quit.\n\nExamples:\n  alusim demos/sum.asm\n  alusim --registers 2 --interval-ms 20\n  alusim --script session.txt demos/sum.asm"
)]
struct Cli {
    /// Assembly source to load before the first command.
    program: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of registers (1-4); overrides the configuration file.
    #[arg(short, long)]
    registers: Option<usize>,

    /// Delay between automatic steps while running, in milliseconds.
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Log every retired instruction.
    #[arg(long)]
    trace: bool,

    /// Read commands from this file instead of stdin.
    #[arg(short, long)]
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("error: {msg}");
            return ExitCode::FAILURE;
        }
    };

    let mut sim = Simulator::new(&config);

    if let Some(path) = &cli.program {
        match sim.execute(Command::Load(path.clone())) {
            Ok(response) => render::response(&response),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => match fs::File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(err) => {
                eprintln!("error: could not open script '{}': {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    render::snapshot(&sim.snapshot());
    command_loop(&mut sim, input);
    ExitCode::SUCCESS
}

/// Applies one command per input line until `quit` or end of input.
///
/// A run still in progress at end of input is allowed to finish.
fn command_loop(sim: &mut Simulator, input: Box<dyn BufRead>) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("error: {err}");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let result = line
            .parse::<Command>()
            .and_then(|command| sim.execute(command));
        match result {
            Ok(Response::Quit) => return,
            Ok(response) => render::response(&response),
            Err(err) => eprintln!("error: {err}"),
        }
    }

    if sim.is_running() {
        sim.wait();
        render::snapshot(&sim.snapshot());
    }
}

/// Builds the configuration: file (if any), then command-line overrides.
fn load_config(cli: &Cli) -> Result<Config, String> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => Config::default(),
    };

    if let Some(count) = cli.registers {
        config.general.register_count = count;
    }
    if let Some(ms) = cli.interval_ms {
        config.run.interval_ms = ms;
    }
    if cli.trace {
        config.general.trace_instructions = true;
    }

    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<Config, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("could not read config '{}': {e}", path.display()))?;
    Config::from_json(&text).map_err(|e| format!("{}: {e}", path.display()))
}

/// Logs go to stderr so they never interleave with command output.
/// `RUST_LOG` overrides the default level.
fn init_tracing(trace: bool) {
    let default = if trace { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
