//! CLI entry point for codebundle

use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use codebundle::{
    Error, OutputConfig, Report, Result, ScanConfig, TreeScanner, print_json, print_preview,
    write_report,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// First-argument spellings that print the usage examples.
const HELP_ARGS: &[&str] = &["--help", "-h", "help"];

const USAGE_EXAMPLES: &str = "
USAGE EXAMPLES:

1. Bundle the current directory:
   codebundle

2. Bundle a specific directory:
   codebundle /path/to/project

3. Preview the structure only:
   codebundle --preview

4. Custom output file:
   codebundle -o my_code_analysis.txt

5. Add custom file extensions:
   codebundle --extensions \"vue,svelte,elm\"

6. Include per-file analysis (lines, functions, classes):
   codebundle --enhanced

7. Print statistics as JSON instead of writing a file:
   codebundle --enhanced --json

The generated file contains:
- A summary with file, directory, line and language counts
- The project structure as an indented tree
- The content of every code file
- Per-file metrics with --enhanced (lines, functions, classes)
";

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
#[command(name = "codebundle")]
#[command(about = "Bundle a source tree into a single annotated text file")]
#[command(version)]
#[command(after_help = USAGE_EXAMPLES)]
struct Args {
    /// Root directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output file (overwritten if it exists)
    #[arg(short, long, default_value = "code.txt")]
    output: PathBuf,

    /// Print only the directory tree; do not write the output file
    #[arg(short, long)]
    preview: bool,

    /// Comma-separated list of additional file extensions to include
    #[arg(long, value_name = "LIST")]
    extensions: Option<String>,

    /// Include per-file analysis: line kinds, function and class counts
    #[arg(long)]
    enhanced: bool,

    /// Print statistics as JSON to stdout instead of writing the output file
    #[arg(long, conflicts_with = "preview")]
    json: bool,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Also honour .gitignore and .ignore files
    #[arg(long)]
    gitignore: bool,

    /// Control color output of the preview: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let argv: Vec<OsString> = std::env::args_os().collect();
    let first = argv.get(1).and_then(|a| a.to_str());
    if first.is_some_and(|a| HELP_ARGS.contains(&a)) {
        print!("{}", USAGE_EXAMPLES);
        process::exit(0);
    }

    let args = Args::parse_from(argv);
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("codebundle: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: &Args) -> Result<()> {
    let root = resolve_root(&args.path)?;

    let mut scan_config = ScanConfig::default()
        .with_ignore_patterns(&args.ignore)?
        .with_gitignore(args.gitignore);

    if let Some(list) = &args.extensions {
        let added = scan_config.add_extensions(list.split(','));
        if args.json {
            info!("added custom extensions: {}", added.join(", "));
        } else {
            println!("Added custom extensions: {}", added.join(", "));
        }
    }

    let output_config = OutputConfig {
        enhanced: args.enhanced,
        use_color: should_use_color(args.color),
    };
    let scanner = TreeScanner::new(scan_config);

    if args.preview {
        return preview(&scanner, &root, &output_config);
    }
    if args.json {
        return json(&scanner, &root, &output_config);
    }
    generate(&scanner, &root, &args.output, &output_config)
}

/// Resolve the root to an absolute, canonical directory path.
fn resolve_root(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    if !absolute.exists() {
        return Err(Error::RootNotFound(absolute));
    }
    if !absolute.is_dir() {
        return Err(Error::NotADirectory(absolute));
    }
    Ok(absolute.canonicalize()?)
}

fn preview(scanner: &TreeScanner, root: &Path, config: &OutputConfig) -> Result<()> {
    let groups = scanner.scan(root);
    if groups.is_empty() {
        return Err(Error::NoCodeFiles(root.to_path_buf()));
    }
    print_preview(root, &groups, config)?;
    Ok(())
}

fn json(scanner: &TreeScanner, root: &Path, config: &OutputConfig) -> Result<()> {
    let groups = scanner.scan(root);
    if groups.is_empty() {
        return Err(Error::NoCodeFiles(root.to_path_buf()));
    }
    let report = Report::build(root, groups, config);
    print_json(&report)
}

fn generate(
    scanner: &TreeScanner,
    root: &Path,
    output: &Path,
    config: &OutputConfig,
) -> Result<()> {
    println!("Parsing codebase in: {}", root.display());
    println!("Output file: {}", output.display());
    println!("Scanning directory structure...");

    let groups = scanner.scan(root);
    if groups.is_empty() {
        return Err(Error::NoCodeFiles(root.to_path_buf()));
    }

    let report = Report::build(root, groups, config);
    let stats = report.stats();
    println!(
        "Found {} code files in {} directories",
        stats.total_files, stats.total_directories
    );

    if config.enhanced {
        println!("Analyzing code and generating output...");
    } else {
        println!("Generating formatted output...");
    }

    let size = write_report(output, &report.render())?;
    println!("Successfully generated: {}", output.display());
    println!("File size: {} bytes", size);

    if config.enhanced {
        println!(
            "Code Analysis: {} functions, {} classes found",
            stats.total_functions, stats.total_classes
        );
    }
    Ok(())
}
