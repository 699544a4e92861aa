use std::cmp::Ordering;
use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;

use dotver::cli::{run_workflow, Action, Output, WorkflowArgs};
use dotver::config::{self, OutputFormat};
use dotver::{ui, Constraint, Version, VersionBump};

#[derive(clap::Parser)]
#[command(
    name = "dotver",
    version,
    about = "Parse, sort and filter dotted version numbers"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Tag pattern used to extract versions, e.g. 'release-{version}'"
    )]
    pattern: Option<String>,

    #[arg(long, value_enum, global = true, help = "Output format")]
    format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Sort versions, oldest first (reads stdin when no versions are given)
    Sort {
        #[arg(short, long, overrides_with = "no_reverse", help = "Newest first")]
        reverse: bool,
        #[arg(
            long,
            overrides_with = "reverse",
            help = "Oldest first, even if configured otherwise"
        )]
        no_reverse: bool,
        versions: Vec<String>,
    },
    /// Print versions within the given bounds, keeping their order
    Filter {
        #[command(flatten)]
        bounds: Bounds,
        versions: Vec<String>,
    },
    /// Print the greatest version within the given bounds
    Latest {
        #[command(flatten)]
        bounds: Bounds,
        versions: Vec<String>,
    },
    /// Compare two versions, printing -1, 0 or 1
    Compare { a: String, b: String },
    /// Check whether a version is within the given bounds
    Check {
        version: String,
        #[command(flatten)]
        bounds: Bounds,
    },
    /// Print the next major, minor or patch version
    Bump { bump: VersionBump, version: String },
}

#[derive(clap::Args, Default)]
struct Bounds {
    #[arg(long, help = "Exclusive lower bound")]
    gt: Option<Version>,
    #[arg(long, help = "Inclusive lower bound")]
    gte: Option<Version>,
    #[arg(long, help = "Exclusive upper bound")]
    lt: Option<Version>,
    #[arg(long, help = "Inclusive upper bound")]
    lte: Option<Version>,
}

impl From<Bounds> for Constraint {
    fn from(bounds: Bounds) -> Self {
        Constraint {
            gt: bounds.gt,
            gte: bounds.gte,
            lt: bounds.lt,
            lte: bounds.lte,
        }
    }
}

/// Version entries from the command line, or one per stdin line if none were given.
fn read_entries(versions: Vec<String>) -> Result<Vec<String>> {
    if !versions.is_empty() {
        return Ok(versions);
    }
    log::debug!("reading versions from stdin");
    let lines = io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?;
    Ok(lines)
}

fn workflow_args(command: Command, pattern: Option<String>) -> Result<WorkflowArgs> {
    let (action, bounds, entries) = match command {
        Command::Sort {
            reverse,
            no_reverse,
            versions,
        } => {
            let reverse = match (reverse, no_reverse) {
                (true, _) => Some(true),
                (false, true) => Some(false),
                (false, false) => None,
            };
            (Action::Sort { reverse }, Bounds::default(), read_entries(versions)?)
        }
        Command::Filter { bounds, versions } => (Action::Filter, bounds, read_entries(versions)?),
        Command::Latest { bounds, versions } => (Action::Latest, bounds, read_entries(versions)?),
        Command::Compare { a, b } => (Action::Compare { a, b }, Bounds::default(), Vec::new()),
        Command::Check { version, bounds } => (Action::Check { version }, bounds, Vec::new()),
        Command::Bump { bump, version } => {
            (Action::Bump { bump, version }, Bounds::default(), Vec::new())
        }
    };

    Ok(WorkflowArgs {
        action,
        bounds: bounds.into(),
        entries,
        pattern,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    let format = args.format.unwrap_or(config.output.format);

    let workflow = workflow_args(args.command, args.pattern)?;
    let result = match run_workflow(workflow, &config) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for warning in &result.warnings {
        ui::display_input_warning(warning);
    }
    if !result.warnings.is_empty() {
        ui::display_status(&format!("{} entries skipped", result.warnings.len()));
    }

    match &result.output {
        Output::Versions(versions) => ui::display_versions(versions, format)?,
        Output::Ordering(ordering) => {
            let n = match ordering {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            };
            println!("{}", n);
        }
        Output::Matched(matched) => println!("{}", matched),
    }

    if !result.success {
        std::process::exit(1);
    }
    Ok(())
}
