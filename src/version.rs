//! Version strings for container builds
//!
//! Tagged CI builds are versioned by their tag. Every other build gets a
//! local timestamp with `:` replaced by `-`, which keeps the string usable in
//! file names and image tags and still sorts in time order.

use crate::config::{Environment, ReleaseRef, GITHUB_REF_NAME};
use crate::error::{LaunchError, Result};
use chrono::{Local, NaiveDateTime, Timelike};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppVersion {
    /// The release tag name, verbatim.
    Tag(String),
    /// A colon-free local timestamp.
    Timestamp(String),
}

impl AppVersion {
    pub fn as_str(&self) -> &str {
        match self {
            AppVersion::Tag(name) => name,
            AppVersion::Timestamp(stamp) => stamp,
        }
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the version for `release`, falling back to `now` for untagged builds.
pub fn app_version(release: &ReleaseRef, now: NaiveDateTime) -> Result<AppVersion> {
    if release.is_tag() {
        let name = release
            .ref_name
            .clone()
            .ok_or(LaunchError::MissingEnvironmentVariable(GITHUB_REF_NAME))?;
        return Ok(AppVersion::Tag(name));
    }
    Ok(AppVersion::Timestamp(timestamp_version(now)))
}

/// Reads the release ref from `environment` and stamps untagged builds with
/// the current local time.
pub fn current_app_version<E: Environment>(environment: &E) -> Result<AppVersion> {
    let release = ReleaseRef::from_env(environment);
    debug!(
        ref_type = release.ref_type.as_deref().unwrap_or("<unset>"),
        "resolving app version"
    );
    app_version(&release, Local::now().naive_local())
}

/// ISO 8601 local time without offset, `:` replaced by `-`.
///
/// Microseconds are printed as six digits and dropped entirely when zero.
pub fn timestamp_version(now: NaiveDateTime) -> String {
    // A leap second reports nanoseconds past 1e9.
    let micros = now.nanosecond() % 1_000_000_000 / 1_000;
    let mut iso = now.format("%Y-%m-%dT%H:%M:%S").to_string();
    if micros != 0 {
        iso.push_str(&format!(".{micros:06}"));
    }
    iso.replace(':', "-")
}
