//! Environment-driven configuration for the launch utilities

use std::collections::HashMap;
use std::env;

/// Set by GitHub Actions to `tag` or `branch`.
pub const GITHUB_REF_TYPE: &str = "GITHUB_REF_TYPE";
/// Set by GitHub Actions to the tag or branch name.
pub const GITHUB_REF_NAME: &str = "GITHUB_REF_NAME";

pub const PRIVATE_KEY_ENVIRONMENT_VARIABLE: &str = "THEBLOCKCHAINKILLER_PRIVATE_KEY";
pub const PUBLIC_KEY_ENVIRONMENT_VARIABLE: &str = "THEBLOCKCHAINKILLER_PUBLIC_KEY";

/// A source of environment variables.
///
/// The binaries read the process environment; tests substitute a map.
pub trait Environment {
    /// Returns the value of `name`, or `None` when it is unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads from the current process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        // Non-UTF-8 values are kept rather than treated as unset.
        env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// The git ref a CI build runs against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseRef {
    pub ref_type: Option<String>,
    pub ref_name: Option<String>,
}

impl ReleaseRef {
    pub fn from_env<E: Environment>(environment: &E) -> Self {
        Self {
            ref_type: environment.var(GITHUB_REF_TYPE),
            ref_name: environment.var(GITHUB_REF_NAME),
        }
    }

    pub fn is_tag(&self) -> bool {
        self.ref_type.as_deref() == Some("tag")
    }
}
