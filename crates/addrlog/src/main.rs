// # addrlog - instance inventory snapshot tool
//
// Thin integration layer: parses flags, initializes tracing, resolves the
// EC2 source, and hands everything to `addrlog_core::InventoryEngine`. All
// pipeline logic lives in addrlog-core.
//
// ## Usage
//
// ```bash
// addrlog --profile prod --region eu-west-1 --ip-kind private
// ```
//
// Every flag also reads an `ADDRLOG_*` environment variable, so the tool can
// be driven from a wrapper script without arguments.

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Result;
use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use addrlog_core::{AddressKind, AppendFailurePolicy, FileAddressSink, InventoryEngine, RunConfig};
use addrlog_source_ec2::Ec2InventorySource;

/// Exit codes for different termination scenarios
///
/// - 0: run completed
/// - 1: configuration or startup error
/// - 2: runtime error (fetch, projection, or append failure)
#[derive(Debug, Clone, Copy)]
enum AddrlogExitCode {
    Success = 0,
    ConfigError = 1,
    RuntimeError = 2,
}

impl From<AddrlogExitCode> for ExitCode {
    fn from(code: AddrlogExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Enumerate EC2 instances and append one address per instance to a log file
#[derive(Debug, Parser)]
#[command(name = "addrlog", version)]
struct Cli {
    /// AWS shared config profile to resolve credentials from
    #[arg(long, env = "ADDRLOG_PROFILE", default_value = "default")]
    profile: String,

    /// AWS region to list instances in
    #[arg(long, env = "ADDRLOG_REGION", default_value = "us-east-1")]
    region: String,

    /// Which address to record per instance: private or public
    /// (case-insensitive)
    #[arg(long = "ip-kind", env = "ADDRLOG_IP_KIND", default_value = "public")]
    ip_kind: String,

    /// Path of the append-only address log
    #[arg(long, env = "ADDRLOG_LOG_FILE", default_value = "generatedLogs")]
    log_file: PathBuf,

    /// Keep processing remaining instances when a single append fails,
    /// instead of aborting the run
    #[arg(long, env = "ADDRLOG_KEEP_GOING")]
    keep_going: bool,

    /// Log level for diagnostics: trace, debug, info, warn, error
    #[arg(long, env = "ADDRLOG_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Turn the parsed flags into a validated run configuration.
    ///
    /// The address kind string is the one place free-form input enters the
    /// pipeline; it is parsed case-insensitively here, once, so an
    /// unsupported kind is reported before anything talks to AWS.
    fn into_config(self) -> Result<RunConfig, addrlog_core::Error> {
        let config = RunConfig {
            profile: self.profile,
            region: self.region,
            address_kind: AddressKind::from_str(&self.ip_kind)?,
            log_path: self.log_file,
            append_failure: if self.keep_going {
                AppendFailurePolicy::Continue
            } else {
                AppendFailurePolicy::FailFast
            },
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing before anything can fail noisily
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        other => {
            eprintln!("Invalid log level '{other}'. Valid levels: trace, debug, info, warn, error");
            return AddrlogExitCode::ConfigError.into();
        }
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
        return AddrlogExitCode::ConfigError.into();
    }

    let config = match cli.into_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Configuration error: {e}");
            return AddrlogExitCode::ConfigError.into();
        }
    };

    // The whole run is one fetch and one linear pass: a current-thread
    // runtime is all it needs.
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {e}");
            return AddrlogExitCode::RuntimeError.into();
        }
    };

    rt.block_on(async {
        match run(config).await {
            Ok(()) => AddrlogExitCode::Success,
            Err(e) => {
                error!("Run failed: {e}");
                AddrlogExitCode::RuntimeError
            }
        }
    })
    .into()
}

/// Wire up the source and sink, then run the pipeline once
async fn run(config: RunConfig) -> Result<()> {
    info!(
        profile = %config.profile,
        region = %config.region,
        kind = %config.address_kind,
        log_file = %config.log_path.display(),
        "starting inventory run"
    );

    let source = Ec2InventorySource::connect(&config.profile, &config.region).await?;
    let sink = FileAddressSink::open(&config.log_path).await?;

    let engine = InventoryEngine::new(Box::new(source), Box::new(sink), config)?;
    engine.run().await?;

    Ok(())
}
