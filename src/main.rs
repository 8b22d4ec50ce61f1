//! CLI entry point for pith

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::time::{Duration, SystemTime};

use clap::{Parser, ValueEnum};
use log::debug;
use pith::{
    ConsoleFormatter, JsonReport, OutputConfig, PithError, ScanConfig, Scanner, Search, SizeRange,
    print_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pith")]
#[command(about = "Find files by size range and case-insensitive name prefix")]
#[command(version)]
struct Args {
    /// Directory to index
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Size range: N, MIN..MAX, MIN.. or ..MAX (units: B, K, M, G, T)
    #[arg(short = 's', long = "size", value_name = "RANGE")]
    size: Option<String>,

    /// Case-insensitive file name prefix
    #[arg(short = 'p', long = "prefix")]
    prefix: Option<String>,

    /// Index all files (ignore .gitignore and hidden-file rules)
    #[arg(short, long)]
    all: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Ignore files matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Only index files modified more recently than DURATION ago (e.g. 30m, 7d)
    #[arg(long = "newer", value_name = "DURATION")]
    newer: Option<String>,

    /// Only index files modified longer than DURATION ago (e.g. 30m, 7d)
    #[arg(long = "older", value_name = "DURATION")]
    older: Option<String>,

    /// Number of parallel workers for reading metadata
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Hide the size column
    #[arg(long = "no-size")]
    no_size: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Parse a duration string like "1h", "7d", "2w" into a Duration.
fn parse_duration_string(s: &str) -> Result<Duration, PithError> {
    humantime::parse_duration(s.trim())
        .map_err(|e| PithError::Duration(format!("'{}': {}", s, e)))
}

fn time_bound(raw: Option<&String>) -> Result<Option<SystemTime>, PithError> {
    raw.map(|s| {
        parse_duration_string(s)
            .map(|d| SystemTime::now().checked_sub(d).unwrap_or(SystemTime::UNIX_EPOCH))
    })
    .transpose()
}

fn run(args: Args) -> Result<(), PithError> {
    let search = Search {
        size: args.size.as_deref().map(SizeRange::parse).transpose()?,
        prefix: args.prefix.clone(),
    };

    let scan_config = ScanConfig {
        show_all: args.all,
        max_depth: args.level,
        ignore_patterns: args.ignore.clone(),
        parallel_workers: args.jobs,
        newer_than: time_bound(args.newer.as_ref())?,
        older_than: time_bound(args.older.as_ref())?,
    };

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let report = Scanner::new(scan_config).scan(&root)?;
    let index = report.build_index();
    let stats = index.stats();
    debug!("index built: {:?}", stats);

    let files = index.search(&search);
    debug!("{:?} matched {} files", search, files.len());

    if args.json {
        print_json(&JsonReport::new(&root, &files, stats, report.skipped.len()))
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
            show_size: !args.no_size,
            highlight_prefix: search.prefix.clone(),
        };
        let mut formatter = ConsoleFormatter::stdout(output_config);
        formatter.write_files(&root, &files)?;
        formatter.finish(files.len(), &stats)?;
        Ok(())
    }
}

fn main() {
    let args = Args::parse();
    pith::logging::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("pith: {}", e);
        process::exit(1);
    }
}
