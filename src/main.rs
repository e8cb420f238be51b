use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use winclone::{
    config::Config,
    model::{Root, ScanReport},
    output::{export, print_console, ExportFormat},
    registry::SystemRegistry,
    scanner::Enumerator,
};

mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
}

const LONG_ABOUT: &str = "\
WinClone scans the Windows registry to find all installed programs and
displays them in a clean, organized list.

It shows:
- Program name
- Version number (if available)
- Installation path (if available)

Both 64-bit and 32-bit programs are scanned.";

const EXAMPLES: &str = "\
Examples:
  winclone scan                    # Display programs on screen
  winclone scan -o programs.json   # Save as JSON file
  winclone scan -o programs.txt    # Save as text file";

#[derive(Parser)]
#[command(name = "winclone")]
#[command(
    author,
    version,
    about = "Windows Program Scanner - Scan and list installed programs",
    long_about = LONG_ABOUT,
    after_help = EXAMPLES,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan and list all installed programs
    #[command(long_about = SCAN_LONG_ABOUT)]
    Scan {
        /// Save results to file (JSON: .json, Text: anything else)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show or create config file
    Config {
        /// Generate default config file
        #[arg(long)]
        init: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

const SCAN_LONG_ABOUT: &str = "\
Scan the Windows registry to find all installed programs.

The registry locations scanned (under HKEY_LOCAL_MACHINE):
- SOFTWARE\\Microsoft\\Windows\\CurrentVersion\\Uninstall (64-bit programs)
- SOFTWARE\\WOW6432Node\\Microsoft\\Windows\\CurrentVersion\\Uninstall (32-bit programs)

Output options:
- Display on screen (default): numbered list
- JSON file (.json): structured data for scripts and APIs
- Text file (any other extension): human-readable report";

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                exit_codes::ERROR
            } else {
                exit_codes::SUCCESS
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    init_logging(&config.log_level);

    match cli.command {
        Commands::Scan { output } => {
            if let Some(e) = config_error {
                eprintln!(
                    "Warning: ignoring config file {}: {:#}",
                    Config::config_path().display(),
                    e
                );
            }
            run_scan(output.as_deref(), &config)
        }
        Commands::Config { init, path } => {
            if let Some(e) = config_error {
                return Err(e.context(format!(
                    "invalid config file {}",
                    Config::config_path().display()
                )));
            }
            handle_config(&config, init, path)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_scan(output_file: Option<&Path>, config: &Config) -> Result<u8> {
    println!("WinClone - Scanning installed programs...");
    println!("{}", "=".repeat(42));

    let progress = if config.show_progress {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Scanning registry...");
        Some(pb)
    } else {
        None
    };

    let report = Enumerator::new(SystemRegistry::new()).enumerate_all();

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    print_scan_summary(&report);

    // Export failures are reported but do not fail the command
    match output_file {
        Some(path) => match export(&report.programs, path, &config.export_options()) {
            Ok(format) => {
                println!();
                println!("Results saved to {}: {}", format.display_name(), path.display());
            }
            Err(e) => {
                let format = ExportFormat::from_path(path);
                tracing::debug!(path = %path.display(), error = %e, "export failed");
                eprintln!("Error saving to {}: {}", format.display_name(), e);
            }
        },
        None => print_console(&report.programs)?,
    }

    Ok(exit_codes::SUCCESS)
}

fn print_scan_summary(report: &ScanReport) {
    for root in Root::ALL {
        if let Some(summary) = report.roots.iter().find(|s| s.root == root) {
            println!("Found {} {} programs", summary.programs, root.label());
        }
        for warning in report.warnings.iter().filter(|w| w.root() == root) {
            println!("Warning: {}", warning);
        }
    }
}

fn handle_config(config: &Config, init: bool, show_path: bool) -> Result<()> {
    let config_path = Config::config_path();

    if show_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() {
            println!("Config file already exists at: {}", config_path.display());
            return Ok(());
        }

        Config::default().save()?;
        println!("Created config file at: {}", config_path.display());
        println!();
        println!("{}", Config::generate_default_config());
        return Ok(());
    }

    if config_path.exists() {
        println!("Config file: {}", config_path.display());
    } else {
        println!("Config file: {} (not found, using defaults)", config_path.display());
        println!("Run 'winclone config --init' to create one.");
    }

    println!();
    println!("Effective settings:");
    for line in config.describe() {
        println!("  {}", line);
    }

    Ok(())
}
