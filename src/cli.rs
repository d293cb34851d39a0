//! Command-line interface for codementor.

use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{self, Config, CONFIG_TEMPLATE};
use crate::content::BUILTIN_CATALOG;
use crate::detect::{run_analysis, run_debug};
use crate::error::MentorError;
use crate::report::{self, Format};
use crate::session::{Picker, Session};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVALID_SELECTOR: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Interactive programming learning and debugging assistant.
///
/// Analyze code for metrics and well-known algorithms, look for common
/// bugs with suggested fixes, practice leveled exercises, and step through
/// tutorials.
#[derive(Parser)]
#[command(name = "codementor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log rule matches and state transitions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report code metrics and recognized algorithms
    Analyze(FeedbackArgs),
    /// Look for a known bug pattern and suggest a fix
    #[command(visible_alias = "fix")]
    Debug(FeedbackArgs),
    /// Get a practice exercise for a difficulty level
    Exercise(ExerciseArgs),
    /// Step through an interactive tutorial
    Tutorial(TutorialArgs),
    /// List difficulty levels and tutorial topics
    List,
    /// Create a config file or a customizable copy of the built-in catalog
    Init(InitArgs),
}

/// Arguments for the analyze and debug commands.
#[derive(Args)]
pub struct FeedbackArgs {
    /// File to read, or "-" for stdin (default: stdin)
    pub path: Option<PathBuf>,

    /// Output format: text, pretty, or json
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// Arguments for the exercise command.
#[derive(Args)]
pub struct ExerciseArgs {
    /// Difficulty level: beginner, intermediate, or advanced
    pub level: String,

    /// Seed for exercise selection (overrides the config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show the reference solution
    #[arg(long)]
    pub solution: bool,

    /// Read commands from stdin: s (toggle solution), n (new exercise), q (quit)
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format: text, pretty, or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Arguments for the tutorial command.
#[derive(Args)]
pub struct TutorialArgs {
    /// Tutorial topic, e.g. "variables"
    pub topic: String,

    /// Step to show (1-based; clamped to the last step)
    #[arg(short, long, default_value_t = 1)]
    pub step: usize,

    /// Read commands from stdin: n (next), p (previous), q (quit)
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format: text, pretty, or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Arguments for the init command.
#[derive(Args)]
pub struct InitArgs {
    /// Output file path (default: codementor.yaml, or catalog.yaml with --catalog)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the built-in exercise and tutorial catalog instead of a config
    #[arg(long)]
    pub catalog: bool,
}

/// A command read from stdin in interactive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    ToggleSolution,
    NewExercise,
    Quit,
}

impl Command {
    /// Parse one input line. Blank and unrecognized lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "n" | "next" => Some(Command::Next),
            "p" | "prev" | "previous" => Some(Command::Previous),
            "s" | "solution" => Some(Command::ToggleSolution),
            "new" | "r" | "regenerate" => Some(Command::NewExercise),
            "q" | "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

fn parse_format(s: &str) -> Option<Format> {
    match s.parse::<Format>() {
        Ok(f) => Some(f),
        Err(e) => {
            eprintln!("Error: {}", e);
            None
        }
    }
}

/// Read the file at `path`, or stdin when the path is absent or "-".
fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {}", p.display(), e)),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Load the config and catalog and build a session from them.
fn open_session(config_path: Option<&Path>, seed: Option<u64>) -> anyhow::Result<Session> {
    let cwd = std::env::current_dir()?;
    let config = Config::load(config_path, &cwd)?;
    config::validate(&config)?;
    let catalog = config.load_catalog()?;

    let picker = match seed {
        Some(s) => Picker::seeded(s),
        None => config.picker(),
    };

    Ok(Session::new(Arc::new(catalog))
        .with_policy(config.selector_policy())
        .with_picker(picker))
}

/// Report an error from the session, mapping rejected selectors to their exit code.
fn selector_error(e: MentorError) -> i32 {
    eprintln!("Error: {}", e);
    if e.is_invalid_selector() {
        eprintln!("Run 'codementor list' to see available difficulties and topics");
        EXIT_INVALID_SELECTOR
    } else {
        EXIT_ERROR
    }
}

/// Run the analyze command.
pub fn run_analyze(args: &FeedbackArgs) -> anyhow::Result<i32> {
    let Some(format) = parse_format(&args.format) else {
        return Ok(EXIT_ERROR);
    };
    let text = read_input(args.path.as_deref())?;
    let feedback = run_analysis(&text);

    match format {
        Format::Json => report::write_json(&feedback)?,
        Format::Pretty => report::write_pretty_analysis(&feedback),
        Format::Text => println!("{}", feedback),
    }
    Ok(EXIT_SUCCESS)
}

/// Run the debug command.
pub fn run_debug_command(args: &FeedbackArgs) -> anyhow::Result<i32> {
    let Some(format) = parse_format(&args.format) else {
        return Ok(EXIT_ERROR);
    };
    let text = read_input(args.path.as_deref())?;
    let feedback = run_debug(&text);

    match format {
        Format::Json => report::write_json(&feedback)?,
        Format::Pretty => report::write_pretty_debug(&feedback),
        Format::Text => println!("{}", feedback),
    }
    Ok(EXIT_SUCCESS)
}

/// Run the exercise command.
pub fn run_exercise(config_path: Option<&Path>, args: &ExerciseArgs) -> anyhow::Result<i32> {
    let Some(format) = parse_format(&args.format) else {
        return Ok(EXIT_ERROR);
    };
    let mut session = open_session(config_path, args.seed)?;

    match session.select_difficulty(&args.level) {
        Ok(Some(_)) => {}
        Ok(None) => {
            eprintln!("Warning: no exercises for difficulty {:?}", args.level);
        }
        Err(e) => return Ok(selector_error(e)),
    }
    if args.solution {
        session.toggle_solution();
    }
    print_exercise(&session, format)?;

    if args.interactive {
        for command in read_commands() {
            match command? {
                Command::ToggleSolution => {
                    session.toggle_solution();
                }
                Command::NewExercise => {
                    session.regenerate();
                }
                Command::Quit => break,
                _ => continue,
            }
            print_exercise(&session, format)?;
        }
    }

    Ok(EXIT_SUCCESS)
}

fn print_exercise(session: &Session, format: Format) -> anyhow::Result<()> {
    let selector = session.exercises();
    match format {
        Format::Json => {
            let view = report::exercise_to_json(selector);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Format::Pretty => report::write_pretty_exercise(selector),
        Format::Text => {
            if let Some(ex) = selector.current() {
                println!("{}", report::render_exercise(ex, selector.solution_visible()));
            }
        }
    }
    Ok(())
}

/// Run the tutorial command.
pub fn run_tutorial(config_path: Option<&Path>, args: &TutorialArgs) -> anyhow::Result<i32> {
    let Some(format) = parse_format(&args.format) else {
        return Ok(EXIT_ERROR);
    };
    let mut session = open_session(config_path, None)?;

    match session.start_topic(&args.topic) {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("Warning: no tutorial for topic {:?}", args.topic);
            return Ok(EXIT_SUCCESS);
        }
        Err(e) => return Ok(selector_error(e)),
    }
    for _ in 1..args.step {
        if !session.next_step() {
            break;
        }
    }
    print_tutorial(&session, format)?;

    if args.interactive {
        for command in read_commands() {
            let moved = match command? {
                Command::Next => session.next_step(),
                Command::Previous => session.previous_step(),
                Command::Quit => break,
                _ => continue,
            };
            if moved {
                print_tutorial(&session, format)?;
            }
        }
    }

    Ok(EXIT_SUCCESS)
}

fn print_tutorial(session: &Session, format: Format) -> anyhow::Result<()> {
    let nav = session.tutorial();
    match format {
        Format::Json => {
            let view = report::tutorial_to_json(nav);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Format::Pretty => report::write_pretty_tutorial(nav),
        Format::Text => {
            if let Some(text) = report::render_tutorial_step(nav) {
                println!("{}", text);
            }
        }
    }
    Ok(())
}

/// Recognized commands from stdin, one per line, until EOF.
fn read_commands() -> impl Iterator<Item = io::Result<Command>> {
    io::stdin().lock().lines().filter_map(|line| match line {
        Ok(l) => Command::parse(&l).map(Ok),
        Err(e) => Some(Err(e)),
    })
}

/// Run the list command.
pub fn run_list(config_path: Option<&Path>) -> anyhow::Result<i32> {
    let session = open_session(config_path, None)?;
    let catalog = session.catalog();

    println!("Difficulties:");
    println!();
    for d in catalog.difficulties() {
        let count = catalog.exercises(d).len();
        let plural = if count != 1 { "s" } else { "" };
        println!("  {:<20} {} exercise{}", d.as_str(), count, plural);
    }

    println!();
    println!("Tutorials:");
    println!();
    for t in catalog.tutorials() {
        let count = t.steps.len();
        let plural = if count != 1 { "s" } else { "" };
        println!("  {:<20} {} ({} step{})", t.topic, t.title, count, plural);
    }

    println!();
    println!("Usage:");
    println!("  codementor exercise <difficulty>");
    println!("  codementor tutorial <topic>");

    Ok(EXIT_SUCCESS)
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    let (default_name, content) = if args.catalog {
        ("catalog.yaml", BUILTIN_CATALOG)
    } else {
        ("codementor.yaml", CONFIG_TEMPLATE)
    };
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_name));

    let what = if args.catalog { "catalog" } else { "config" };
    if output.exists() {
        eprintln!("Error: {} already exists: {}", what, output.display());
        eprintln!("Remove it or pass --output with a new path");
        return Ok(EXIT_ERROR);
    }

    let parent = output.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = parent {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Error: cannot create {}: {}", dir.display(), e);
            return Ok(EXIT_ERROR);
        }
    }

    if let Err(e) = std::fs::write(&output, content) {
        eprintln!("Error: failed to write {} {}: {}", what, output.display(), e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", output.display());
    println!();
    println!("Next steps:");
    if args.catalog {
        println!("  1. Add exercises and tutorials to {}", output.display());
        println!("  2. Point 'catalog:' in codementor.yaml at it");
    } else {
        println!("  1. Edit {} to customize selection behavior", output.display());
        println!("  2. Run: codementor list");
    }
    io::stdout().flush()?;

    Ok(EXIT_SUCCESS)
}
