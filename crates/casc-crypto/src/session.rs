//! Storage session: owns the key registry for as long as the archive is open
//!
//! Static keys are assembled once at open time, in order: the compiled
//! catalog (if enabled), then each configured key file. A later source
//! overrides an earlier one for the same key name. Closing the session drops
//! (and zeroizes) every key; any further call returns `InvalidHandle`.

use casc_core::config::KeyringConfig;
use casc_core::{CascError, CascResult, FrameIndex, KeyName};

use crate::catalog;
use crate::frame;
use crate::keyfile::load_key_file;
use crate::keys::EncryptionKey;
use crate::registry::KeyRegistry;
use crate::KEY_SIZE;

#[derive(Debug)]
pub struct Session {
    keys: Option<KeyRegistry>,
}

impl Session {
    /// Open a session whose key registry is built from `config`.
    pub fn open(config: &KeyringConfig) -> CascResult<Self> {
        let mut static_keys: Vec<EncryptionKey> = Vec::new();
        if config.builtin_catalog {
            static_keys.extend(
                catalog::builtin_keys().map(|(name, bytes)| EncryptionKey::new(name, bytes)),
            );
        }
        for path in &config.key_files {
            static_keys.extend(load_key_file(path)?);
        }

        let registry = KeyRegistry::new(static_keys, config.extra_key_capacity)?;
        tracing::info!(
            static_keys = registry.static_len(),
            extra_capacity = registry.extra_capacity(),
            "opened storage session"
        );
        Ok(Self::with_keys(registry))
    }

    /// Open a session around an already-built registry.
    pub fn with_keys(registry: KeyRegistry) -> Self {
        Self {
            keys: Some(registry),
        }
    }

    pub fn is_open(&self) -> bool {
        self.keys.is_some()
    }

    /// Drop the key registry. Idempotent.
    pub fn close(&mut self) {
        if self.keys.take().is_some() {
            tracing::debug!("closed storage session");
        }
    }

    pub fn keys(&self) -> CascResult<&KeyRegistry> {
        self.keys.as_ref().ok_or(CascError::InvalidHandle)
    }

    fn keys_mut(&mut self) -> CascResult<&mut KeyRegistry> {
        self.keys.as_mut().ok_or(CascError::InvalidHandle)
    }

    /// Register a key that became known after the session opened.
    pub fn add_encryption_key(&mut self, name: KeyName, key: [u8; KEY_SIZE]) -> CascResult<()> {
        self.keys_mut()?.register(name, key)
    }

    pub fn find_key(&self, name: KeyName) -> CascResult<Option<&[u8; KEY_SIZE]>> {
        Ok(self.keys()?.lookup(name))
    }

    /// Decrypt one encrypted frame. See [`frame::decrypt_frame`].
    pub fn decrypt_frame(
        &self,
        input: &[u8],
        output: &mut [u8],
        frame_index: FrameIndex,
    ) -> CascResult<usize> {
        frame::decrypt_frame(self.keys()?, input, output, frame_index)
    }

    /// Copy an unencrypted frame. See [`frame::direct_copy`].
    pub fn direct_copy(&self, input: &[u8], output: &mut [u8]) -> CascResult<usize> {
        self.keys()?;
        frame::direct_copy(input, output)
    }
}
