//! depwait: block until TCP and HTTP(S) dependencies are reachable.
//!
//! # Architecture Overview
//!
//! ```text
//!   flags / config file
//!          │
//!          ▼
//!   ┌─────────────┐    ┌──────────────┐    ┌─────────────────────────────┐
//!   │   config    │───▶│   targets    │───▶│            check            │
//!   │ load+merge  │    │ string→spec  │    │  TcpCheck / HttpCheck(S)    │
//!   └─────────────┘    └──────────────┘    └──────────────┬──────────────┘
//!                                                         │
//!                                                         ▼
//!                              ┌──────────────────────────────────────────┐
//!                              │                   gate                   │
//!                              │  orchestrator ──spawn──▶ poller × N      │
//!                              │       ▲                     │            │
//!                              │       └────── JoinSet ◀─────┘            │
//!                              └──────────────────┬───────────────────────┘
//!                                                 │ all ready?
//!                                                 ▼
//!                                        process exit code
//! ```

use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};

use depwait::config::{load_config, validate_config, ConfigError, GateConfig, RunConfig};
use depwait::gate::wait_for_deps_blocking;
use depwait::observability::logging::init_logging;
use depwait::targets::TargetSpec;
use depwait::GateError;

#[derive(Parser, Debug)]
#[command(name = "depwait", version)]
#[command(about = "Wait until TCP and HTTP(S) dependencies are reachable", long_about = None)]
struct Cli {
    /// Comma separated targets: protocol:host:port[:timeoutMillis[:path[:code0_code1]]],
    /// e.g. tcp:localhost:5432:2000,http:localhost:8080:5000:health:200_204
    #[arg(short, long)]
    targets: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Poll interval in milliseconds [default: 250]
    #[arg(long, value_name = "MILLIS")]
    poll_interval: Option<u64>,

    /// Timeout for targets that do not set one, in milliseconds [default: 30000]
    #[arg(long, value_name = "MILLIS")]
    default_timeout: Option<u64>,

    /// Exit code when every dependency is reachable [default: 0]
    #[arg(long, allow_negative_numbers = true)]
    exit_code_on_connect: Option<i32>,

    /// Exit code when any dependency is not reachable [default: 1]
    #[arg(long, allow_negative_numbers = true)]
    exit_code_on_fail: Option<i32>,

    /// Suppress all output
    #[arg(short, long)]
    quiet_mode: bool,

    /// Stop waiting on the other dependencies after the first timeout
    #[arg(long)]
    fail_fast: bool,

    /// Diagnostic log level written to stderr (overridden by RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    /// Load the config file, if any, and lay the flags over it.
    fn resolve(&self) -> Result<GateConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GateConfig::default(),
        };

        if let Some(targets) = &self.targets {
            config.targets.extend(
                targets
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from),
            );
        }
        if let Some(ms) = self.poll_interval {
            config.poll_interval_ms = ms;
        }
        if let Some(ms) = self.default_timeout {
            config.default_timeout_ms = ms;
        }
        if let Some(code) = self.exit_code_on_connect {
            config.exit_code_on_ok = code;
        }
        if let Some(code) = self.exit_code_on_fail {
            config.exit_code_on_fail = code;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        config.quiet |= self.quiet_mode;
        config.fail_fast |= self.fail_fast;

        Ok(config)
    }
}

fn run(config: &GateConfig) -> Result<i32, GateError> {
    let specs = validate_config(config)?;
    init_logging(&config.logging, config.quiet);

    tracing::debug!(
        targets = specs.len(),
        poll_interval_ms = config.poll_interval_ms,
        fail_fast = config.fail_fast,
        "Configuration loaded"
    );

    let run_config = RunConfig::from(config);
    let checks = specs.into_iter().map(TargetSpec::into_check).collect();
    let all_ready = wait_for_deps_blocking(checks, &run_config)?;

    Ok(run_config.exit_code(all_ready))
}

fn main() {
    let cli = Cli::parse();

    if cli.targets.is_none() && cli.config.is_none() {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("depwait: {}", e);
            process::exit(1);
        }
        println!();
        return;
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            if !cli.quiet_mode {
                eprintln!("depwait: {}", e);
            }
            process::exit(cli.exit_code_on_fail.unwrap_or(1));
        }
    };

    match run(&config) {
        Ok(code) => process::exit(code),
        Err(e) => {
            if !config.quiet {
                eprintln!("depwait: {}", e);
            }
            process::exit(config.exit_code_on_fail);
        }
    }
}
