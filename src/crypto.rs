//! Decoding of base64-wrapped SSH key files

use crate::credentials::KeyKind;
use crate::error::{LaunchError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;

/// Size of the fixed key slot, including its NUL terminator.
pub const MAX_SSH_KEY_LENGTH: usize = 1024;

/// The decoded contents of an SSH key file.
#[derive(Clone, PartialEq, Eq)]
pub struct SshKey {
    bytes: Vec<u8>,
}

impl SshKey {
    /// Largest key that still leaves room for the terminator.
    pub const MAX_DECODED_LEN: usize = MAX_SSH_KEY_LENGTH - 1;

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Key text with invalid UTF-8 replaced, for display.
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

impl fmt::Debug for SshKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SshKey").field("len", &self.bytes.len()).finish()
    }
}

/// Decodes base64 key file contents for `kind`.
///
/// Surrounding whitespace is ignored, as when the variable was filled from a
/// file with a trailing newline.
pub fn decode_ssh_key(kind: KeyKind, encoded: &str) -> Result<SshKey> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Err(LaunchError::EmptyKey(kind));
    }
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|source| LaunchError::InvalidKeyEncoding { kind, source })?;
    if bytes.len() > SshKey::MAX_DECODED_LEN {
        return Err(LaunchError::KeyTooLong {
            kind,
            length: bytes.len(),
            max: SshKey::MAX_DECODED_LEN,
        });
    }
    Ok(SshKey { bytes })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBLIC_KEY_TEXT: &str = "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIBpq miner@example";

    #[test]
    fn test_decode_public_key() {
        let encoded = STANDARD.encode(PUBLIC_KEY_TEXT);
        let key = decode_ssh_key(KeyKind::Public, &encoded).unwrap();

        assert_eq!(key.as_bytes(), PUBLIC_KEY_TEXT.as_bytes());
        assert_eq!(key.to_text(), PUBLIC_KEY_TEXT);
        assert_eq!(key.len(), PUBLIC_KEY_TEXT.len());
    }

    #[test]
    fn test_decode_ignores_surrounding_whitespace() {
        let encoded = format!("  {}\n", STANDARD.encode(PUBLIC_KEY_TEXT));
        let key = decode_ssh_key(KeyKind::Public, &encoded).unwrap();
        assert_eq!(key.to_text(), PUBLIC_KEY_TEXT);
    }

    #[test]
    fn test_empty_key_rejected() {
        for encoded in ["", "   ", "\n"] {
            let err = decode_ssh_key(KeyKind::Private, encoded).unwrap_err();
            assert!(matches!(err, LaunchError::EmptyKey(KeyKind::Private)));
        }
    }

    #[test]
    fn test_invalid_base64_rejected() {
        let err = decode_ssh_key(KeyKind::Public, "not base64!").unwrap_err();
        match err {
            LaunchError::InvalidKeyEncoding { kind, .. } => assert_eq!(kind, KeyKind::Public),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_key_length_limit() {
        let largest = STANDARD.encode(vec![b'k'; SshKey::MAX_DECODED_LEN]);
        let key = decode_ssh_key(KeyKind::Private, &largest).unwrap();
        assert_eq!(key.len(), 1023);

        let too_long = STANDARD.encode(vec![b'k'; MAX_SSH_KEY_LENGTH]);
        let err = decode_ssh_key(KeyKind::Private, &too_long).unwrap_err();
        match err {
            LaunchError::KeyTooLong { kind, length, max } => {
                assert_eq!(kind, KeyKind::Private);
                assert_eq!(length, 1024);
                assert_eq!(max, 1023);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_debug_hides_key_bytes() {
        let key = decode_ssh_key(KeyKind::Private, &STANDARD.encode("secret-bytes")).unwrap();
        let shown = format!("{key:?}");
        assert_eq!(shown, "SshKey { len: 12 }");
    }
}
