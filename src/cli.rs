//! Command-line front ends shared by the binaries

use crate::config::{Environment, PRIVATE_KEY_ENVIRONMENT_VARIABLE, PUBLIC_KEY_ENVIRONMENT_VARIABLE};
use crate::credentials::{load_key_pair, LoadedKeyPair};
use crate::error::Result;
use crate::version::{current_app_version, AppVersion};
use clap::Parser;
use std::io::Write;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Prints the version of the app for use in container builds.
///
/// Tagged builds (GITHUB_REF_TYPE=tag) print GITHUB_REF_NAME. Any other
/// build prints the local time with colons replaced by hyphens.
#[derive(Parser, Debug)]
#[command(name = "get_app_version")]
pub struct GetAppVersionArgs {}

/// Processes command line arguments and runs the miner.
#[derive(Parser, Debug)]
#[command(name = "run_miner", infer_long_args = true)]
pub struct RunMinerArgs {
    /// The contents of the private key file. If not supplied, the program
    /// will load the key contents from the THEBLOCKCHAINKILLER_PRIVATE_KEY
    /// environment variable.
    #[arg(long = "private_key_file_contents", short = 'p', value_name = "CONTENTS")]
    pub private_key_file_contents: Option<String>,

    /// The contents of the public key file. If not supplied, the program
    /// will load the key contents from the THEBLOCKCHAINKILLER_PUBLIC_KEY
    /// environment variable.
    #[arg(long = "public_key_file_contents", short = 'k', value_name = "CONTENTS")]
    pub public_key_file_contents: Option<String>,

    /// Decode both keys as base64 and fail if either is malformed or longer
    /// than 1023 bytes.
    #[arg(long)]
    pub decode_keys: bool,
}

/// Installs a stderr fmt subscriber filtered by `RUST_LOG`.
///
/// Falls back to `default_level` when `RUST_LOG` is unset or invalid.
pub fn init_logging(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolves the app version and writes it, newline-terminated, to `out`.
pub fn run_get_app_version<E: Environment, W: Write>(
    environment: &E,
    out: &mut W,
) -> Result<AppVersion> {
    let version = current_app_version(environment)?;
    debug!(version = %version, "app version resolved");
    writeln!(out, "{}", version)?;
    Ok(version)
}

/// Loads the miner's credentials. Launching the miner itself is not
/// implemented, so this returns once the keys are in hand.
pub fn run_miner<E: Environment>(args: &RunMinerArgs, environment: &E) -> Result<LoadedKeyPair> {
    let loaded = load_key_pair(
        args.private_key_file_contents.as_deref(),
        args.public_key_file_contents.as_deref(),
        environment,
    )?;
    info!(
        private_key_source = %loaded.private_key_source,
        public_key_source = %loaded.public_key_source,
        "credentials loaded"
    );

    if args.decode_keys {
        let decoded = loaded.contents.decode()?;
        info!(
            private_key_len = decoded.private_key.len(),
            "using public key: {}",
            decoded.public_key.to_text()
        );
    }

    info!("miner launch is not implemented; exiting");
    Ok(loaded)
}

/// How to supply keys when neither flag nor variable is present.
pub fn run_miner_usage_hint() -> String {
    format!(
        "supply keys with --private_key_file_contents and --public_key_file_contents, \
         or set the environment variables {} and {}",
        PRIVATE_KEY_ENVIRONMENT_VARIABLE, PUBLIC_KEY_ENVIRONMENT_VARIABLE
    )
}
