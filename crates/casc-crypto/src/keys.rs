//! Frame encryption keys: a 64-bit key name bound to 128 bits of key material

use casc_core::{CascError, CascResult, KeyName};
use zeroize::Zeroize;

use crate::KEY_SIZE;

/// A named 128-bit frame encryption key. Zeroized on drop.
#[derive(Clone)]
pub struct EncryptionKey {
    name: KeyName,
    bytes: [u8; KEY_SIZE],
}

impl EncryptionKey {
    pub fn new(name: KeyName, bytes: [u8; KEY_SIZE]) -> Self {
        Self { name, bytes }
    }

    /// Parse key material given as 32 hex digits.
    pub fn from_hex(name: KeyName, key_hex: &str) -> CascResult<Self> {
        let mut bytes = [0u8; KEY_SIZE];
        hex::decode_to_slice(key_hex.trim(), &mut bytes).map_err(|e| {
            CascError::UnsupportedFormat(format!("key {name}: invalid key hex: {e}"))
        })?;
        Ok(Self::new(name, bytes))
    }

    pub fn name(&self) -> KeyName {
        self.name
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl Drop for EncryptionKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionKey")
            .field("name", &self.name)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
