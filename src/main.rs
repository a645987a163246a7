mod fetch;
mod parser;
mod report;
mod runner;
mod settings;
mod store;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use crate::report::TracingReporter;
use crate::runner::exec::ShellExecutor;
use crate::runner::verdict::Verdict;
use crate::settings::{timeout_from_secs, Settings};

const FULL_VERSION_HINT: &str = "Please use the full version: https://github.com/online-judge-tools/oj";

#[derive(Parser)]
#[command(
    name = "oj-mini",
    version,
    about = "A portable and restricted version of https://github.com/online-judge-tools/oj"
)]
struct Cli {
    /// Show debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download sample cases into the test directory
    #[command(visible_aliases = ["d", "dl"])]
    Download {
        url: String,
        /// Target directory (must not exist yet)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Test your code against the stored cases
    #[command(visible_alias = "t")]
    Test {
        /// Shell command to run (default: ./a.out)
        #[arg(short, long)]
        command: Option<String>,
        /// Directory holding the cases
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Kill a case after this many seconds and judge it TLE
        #[arg(long)]
        timeout: Option<f64>,
    },
    /// Not supported
    #[command(visible_alias = "l")]
    Login,
    /// Not supported
    #[command(visible_alias = "s")]
    Submit,
    /// Not supported
    #[command(visible_alias = "g/o")]
    GenerateOutput,
    /// Not supported
    #[command(visible_alias = "g/i")]
    GenerateInput,
    /// Not supported
    #[command(visible_alias = "t/r")]
    TestReactive,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Download { .. } => "download",
            Commands::Test { .. } => "test",
            Commands::Login => "login",
            Commands::Submit => "submit",
            Commands::GenerateOutput => "generate-output",
            Commands::GenerateInput => "generate-input",
            Commands::TestReactive => "test-reactive",
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let t0 = Instant::now();
    let settings = Settings::load()?;

    let ok = match cli.command {
        Commands::Download { url, dir } => {
            let dir = dir.unwrap_or_else(|| settings.test_dir.clone());
            download(&url, dir).await
        }
        Commands::Test {
            command,
            dir,
            timeout,
        } => {
            let command = command.unwrap_or_else(|| settings.command.clone());
            let dir = dir.unwrap_or_else(|| settings.test_dir.clone());
            let timeout = match timeout {
                Some(secs) => timeout_from_secs(secs).context("invalid --timeout")?,
                None => settings.timeout()?,
            };
            test(&command, dir, timeout).await
        }
        other => {
            error!(
                "The subcommand \"{}\" is not supported in oj-mini. {}",
                other.name(),
                FULL_VERSION_HINT
            );
            false
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        info!("Done in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Fetch, extract, store. Failures are logged here; the caller only gets the outcome.
async fn download(url: &str, dir: PathBuf) -> bool {
    let fetched = match fetch::detect_site(url) {
        Ok((parsed, site)) => {
            info!("site: {}", site);
            fetch::fetch_page(parsed).await.map(|html| (site, html))
        }
        Err(e) => Err(e),
    };
    let (site, html) = match fetched {
        Ok(v) => v,
        Err(e) => {
            error!("{}", e);
            if e.is_status() {
                info!("oj-mini doesn't work in running contests. {}", FULL_VERSION_HINT);
            }
            return false;
        }
    };

    let samples = match parser::extract_samples(site, &html) {
        Ok(samples) => samples,
        Err(e) => {
            error!("failed to parse sample cases: {}", e);
            info!("oj-mini supports only few problems. {}", FULL_VERSION_HINT);
            return false;
        }
    };

    match store::write_cases(&dir, &samples, &mut TracingReporter) {
        Ok(written) => {
            info!("{} sample cases written to {}", written.len() / 2, dir.display());
            true
        }
        Err(e) => {
            error!("{}", e);
            false
        }
    }
}

/// Run every stored case. `false` unless all of them are AC.
async fn test(command: &str, dir: PathBuf, timeout: Option<Duration>) -> bool {
    let cases = match runner::cases::discover_cases(&dir) {
        Ok(cases) => cases,
        Err(e) => {
            error!("{}", e);
            return false;
        }
    };

    let executor = ShellExecutor::new(timeout);
    match runner::run_tests(&cases, command, &executor, &mut TracingReporter).await {
        Ok(summary) => {
            let failed: Vec<String> = summary
                .results
                .iter()
                .filter(|r| r.verdict != Verdict::Ac)
                .map(|r| format!("{} ({})", r.name, r.verdict))
                .collect();
            if !failed.is_empty() {
                info!("failed: {}", failed.join(", "));
            }
            summary.all_passed()
        }
        Err(e) => {
            error!("{}", e);
            false
        }
    }
}
