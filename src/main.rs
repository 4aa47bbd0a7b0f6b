// treewalk: build-then-run interpreter with a step-through viewer

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use treewalk::interpreter::engine::{Execution, Interpreter};
use treewalk::parser::parse_program;
use treewalk::snapshot::ChannelPaths;
use treewalk::ui::App;

/// Parse a whole program, then execute it.
///
/// Writes executed-statement effects, a rendered tree per executed statement
/// and runtime diagnostics to three separate files.
///
/// EXAMPLES:
///     treewalk                      Run in.txt, write out.txt / tree.txt / outError.txt
///     treewalk prog.txt --stdout    Print the channels instead of writing files
///     treewalk prog.txt --tui       Replay the run statement by statement
#[derive(Parser, Debug)]
#[command(name = "treewalk")]
#[command(version)]
struct Cli {
    /// Program source file
    #[arg(default_value = "in.txt")]
    file: PathBuf,

    /// Effects channel file
    #[arg(short = 'o', long = "out", default_value = "out.txt")]
    out: PathBuf,

    /// Trace channel file
    #[arg(short = 't', long = "tree", default_value = "tree.txt")]
    tree: PathBuf,

    /// Diagnostics channel file
    #[arg(short = 'e', long = "errors", default_value = "outError.txt")]
    errors: PathBuf,

    /// Print the channels to stdout/stderr instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Open the step-through viewer after the run
    #[arg(long)]
    tui: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn channel_paths(&self) -> ChannelPaths {
        ChannelPaths::new(&self.out, &self.tree, &self.errors)
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read '{}'", cli.file.display()))?;

    // Phase 1: build the whole tree
    info!(file = %cli.file.display(), "parsing");
    let program = match parse_program(&source) {
        Ok(program) => program,
        Err(err) => {
            warn!(line = err.location.line, "{}", err);
            if cli.stdout {
                eprintln!("{}", err.diagnostic_line());
            } else {
                cli.channel_paths()
                    .write_parse_failure(&err)
                    .context("failed to write output files")?;
            }
            eprintln!("{}", err);
            return Ok(ExitCode::FAILURE);
        }
    };
    info!(
        statements = program.len(),
        variables = program.variable_count(),
        "parsed successfully"
    );

    // Phase 2: execute
    let execution = Interpreter::new(program).run();
    info!(
        snapshots = execution.total_snapshots(),
        diagnostics = execution.error_count(),
        "execution completed"
    );

    if cli.stdout {
        print_channels(&execution)?;
    } else {
        let paths = cli.channel_paths();
        execution
            .channels()
            .write_files(&paths)
            .context("failed to write output files")?;
        info!(
            effects = %paths.effects.display(),
            trace = %paths.trace.display(),
            diagnostics = %paths.diagnostics.display(),
            "wrote channels"
        );
    }

    if cli.tui {
        run_tui(execution, source)?;
    }

    // Runtime diagnostics do not change the exit status
    Ok(ExitCode::SUCCESS)
}

fn print_channels(execution: &Execution) -> Result<()> {
    let channels = execution.channels();
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", channels.trace_text())?;
    write!(stdout, "{}", channels.effects_text())?;
    stdout.flush()?;
    eprint!("{}", channels.diagnostics_text());
    Ok(())
}

fn run_tui(execution: Execution, source: String) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(execution, source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("viewer failed")
}
