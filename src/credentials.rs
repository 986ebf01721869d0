//! Loading of the miner's key pair
//!
//! Each key comes from its command-line flag when one is given, and from its
//! environment variable otherwise. Key contents are opaque strings here; they
//! are only interpreted by [`KeyPairContents::decode`].

use crate::config::{Environment, PRIVATE_KEY_ENVIRONMENT_VARIABLE, PUBLIC_KEY_ENVIRONMENT_VARIABLE};
use crate::crypto::{decode_ssh_key, SshKey};
use crate::error::{LaunchError, Result};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Private,
    Public,
}

impl KeyKind {
    /// Long command-line flag, without the leading dashes.
    pub fn flag(self) -> &'static str {
        match self {
            KeyKind::Private => "private_key_file_contents",
            KeyKind::Public => "public_key_file_contents",
        }
    }

    pub fn environment_variable(self) -> &'static str {
        match self {
            KeyKind::Private => PRIVATE_KEY_ENVIRONMENT_VARIABLE,
            KeyKind::Public => PUBLIC_KEY_ENVIRONMENT_VARIABLE,
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KeyKind::Private => write!(f, "private"),
            KeyKind::Public => write!(f, "public"),
        }
    }
}

/// Where a key's contents were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    CommandLine,
    Environment(&'static str),
}

impl fmt::Display for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KeySource::CommandLine => write!(f, "command line"),
            KeySource::Environment(name) => write!(f, "environment variable {}", name),
        }
    }
}

/// The raw contents of the two key files.
#[derive(Debug)]
pub struct KeyPairContents {
    private_key_file_contents: SecretString,
    public_key_file_contents: String,
}

impl KeyPairContents {
    pub fn new(private_key_file_contents: String, public_key_file_contents: String) -> Self {
        Self {
            private_key_file_contents: SecretString::new(private_key_file_contents),
            public_key_file_contents,
        }
    }

    pub fn private_key_file_contents(&self) -> &str {
        self.private_key_file_contents.expose_secret()
    }

    pub fn public_key_file_contents(&self) -> &str {
        &self.public_key_file_contents
    }

    /// Decodes both keys from base64. The public key is checked first.
    pub fn decode(&self) -> Result<DecodedKeyPair> {
        let public_key = decode_ssh_key(KeyKind::Public, self.public_key_file_contents())?;
        let private_key = decode_ssh_key(KeyKind::Private, self.private_key_file_contents())?;
        Ok(DecodedKeyPair {
            public_key,
            private_key,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedKeyPair {
    pub public_key: SshKey,
    pub private_key: SshKey,
}

/// A key pair together with where each half came from.
#[derive(Debug)]
pub struct LoadedKeyPair {
    pub contents: KeyPairContents,
    pub private_key_source: KeySource,
    pub public_key_source: KeySource,
}

/// Loads the key pair, preferring flag values over the environment.
///
/// A flag given as an empty string counts as absent. The environment is only
/// read for keys whose flag is absent, and an unset variable is an error. The
/// private key is resolved first.
pub fn load_key_pair<E: Environment>(
    private_key_flag: Option<&str>,
    public_key_flag: Option<&str>,
    environment: &E,
) -> Result<LoadedKeyPair> {
    let (private_key, private_key_source) =
        resolve_key(KeyKind::Private, private_key_flag, environment)?;
    let (public_key, public_key_source) =
        resolve_key(KeyKind::Public, public_key_flag, environment)?;

    Ok(LoadedKeyPair {
        contents: KeyPairContents::new(private_key, public_key),
        private_key_source,
        public_key_source,
    })
}

fn resolve_key<E: Environment>(
    kind: KeyKind,
    flag: Option<&str>,
    environment: &E,
) -> Result<(String, KeySource)> {
    if let Some(value) = flag.filter(|value| !value.is_empty()) {
        info!("using {} key from the command line", kind);
        return Ok((value.to_string(), KeySource::CommandLine));
    }

    let name = kind.environment_variable();
    info!("no {} key on the command line, reading {}", kind, name);
    let value = environment
        .var(name)
        .ok_or(LaunchError::MissingEnvironmentVariable(name))?;
    Ok((value, KeySource::Environment(name)))
}
