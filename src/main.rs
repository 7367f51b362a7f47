//! liveterm - live test-run report demo
//!
//! Simulates a test run and reports it with the incremental renderer: one
//! list per package whose items move from RUN to PASS or FAIL, a summary
//! line kept up to date, and nothing redrawn that did not change.
//!
//! # Quick Start
//!
//! ```text
//! liveterm                 # Render to this terminal
//! liveterm --virtual       # Render into the emulator, print the final screen
//! liveterm --config a.toml # Use a specific configuration file
//! ```

use std::env;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use liveterm::config::{Config, DemoConfig};
use liveterm::core::term::VirtualTerminal;
use liveterm::core::terminal::{Console, Terminal};
use liveterm::ui::Container;

/// Command line options
#[derive(Debug, Default)]
struct Options {
    /// Render into the virtual terminal instead of stdout
    virtual_terminal: bool,
    /// Configuration file overriding ~/.liveterm/config.toml
    config: Option<PathBuf>,
}

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_version() {
    eprintln!("liveterm {}", VERSION);
}

fn print_help() {
    eprintln!("liveterm {} - Incremental terminal renderer demo", VERSION);
    eprintln!();
    eprintln!("Usage: liveterm [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --virtual             Render into the virtual terminal and print the result");
    eprintln!("  -c, --config <PATH>   Configuration file (default: ~/.liveterm/config.toml)");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "--virtual" => options.virtual_terminal = true,
            "-c" | "--config" => {
                let path = args.next().ok_or_else(|| format!("{} requires a path", arg))?;
                options.config = Some(PathBuf::from(path));
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
    }

    Ok(options)
}

fn init_logging(config: &Config) {
    let log_path = config.log_path();
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.log.level))
            .unwrap_or_else(|_| EnvFilter::new(Level::INFO.as_str()));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn main() -> anyhow::Result<()> {
    let options = match parse_args() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    let config = match &options.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    init_logging(&config);
    info!("liveterm {} starting...", VERSION);

    if options.virtual_terminal {
        let mut container = Container::with_config(VirtualTerminal::new(), &config.render);
        let demo = DemoConfig { step_ms: 0, ..config.demo.clone() };
        run_demo(&mut container, &demo)?;
        println!("{}", container.terminal().text());
    } else {
        let mut container = Container::with_config(Console::stdout(), &config.render);
        run_demo(&mut container, &config.demo)?;
    }

    info!("liveterm finished");
    Ok(())
}

/// Outcome of one simulated test
enum Outcome {
    Pass { millis: u64 },
    Fail { reason: String },
}

/// Deterministic outcome so repeated runs draw the same report
fn outcome(package: usize, test: usize) -> Outcome {
    let seed = package * 7 + test * 3;
    if seed % 5 == 4 {
        Outcome::Fail {
            reason: format!("expected {}, got {}", seed, seed + 1),
        }
    } else {
        Outcome::Pass {
            millis: (seed as u64 * 13) % 90 + 1,
        }
    }
}

fn run_demo<T: Terminal>(container: &mut Container<T>, demo: &DemoConfig) -> anyhow::Result<()> {
    let step = Duration::from_millis(demo.step_ms);
    let pause = || {
        if !step.is_zero() {
            thread::sleep(step);
        }
    };

    container.new_text_block("title", "liveterm demo\n=============");
    let summary = container.new_text_block("summary", "starting...");
    container.render().context("Failed to render report")?;

    let (mut passed, mut failed) = (0usize, 0usize);

    for package in 0..demo.packages {
        let package_id = format!("example.com/pkg{}", package);
        if container.has_element_with_id(&package_id) {
            continue;
        }
        let list = container.new_unordered_list(package_id.clone(), &format!("RUN  {}", package_id));
        let mut package_failed = false;

        for test in 0..demo.tests_per_package {
            let name = format!("TestCase{}", test);
            let Some(report) = container.list_mut(list) else {
                break;
            };
            let item = match report.find_item(&name) {
                Some(item) => item,
                None => report.new_named_item(name.clone(), &format!("RUN  {}", name)),
            };
            container.render().context("Failed to render report")?;
            pause();

            let text = match outcome(package, test) {
                Outcome::Pass { millis } => {
                    passed += 1;
                    format!("PASS {} (0.{:02}s)", name, millis)
                }
                Outcome::Fail { reason } => {
                    failed += 1;
                    package_failed = true;
                    format!("FAIL {}\n    {}", name, reason)
                }
            };
            if let Some(report) = container.list_mut(list) {
                report.edit_item(item, &text)?;
            }
            if let Some(block) = container.text_block_mut(summary) {
                block.edit(&format!("{} passed, {} failed", passed, failed));
            }
            container.render().context("Failed to render report")?;
            pause();
        }

        let status = if package_failed { "FAIL" } else { "ok  " };
        if let Some(report) = container.list_mut(list) {
            report.edit(&format!("{} {}", status, package_id));
        }
        container.render().context("Failed to render report")?;
    }

    info!(passed, failed, "demo run complete");
    Ok(())
}
