//! casc-crypto: frame decryption for CASC game-asset archives
//!
//! Encrypted frame layout (binary):
//! ```text
//! [1 byte: key name size (0 or 8)][key name, little-endian]
//! [1 byte: IV size (4 or 8)][IV, zero-padded to 8 bytes]
//! [1 byte: algorithm tag ('S' = Salsa20, 'A' = reserved)]
//! [N bytes: ciphertext]
//! ```
//!
//! Decryption pipeline:
//! ```text
//! parse envelope → look up key in the session registry → IV[0..4] ^= frame_index (LE)
//!   → Salsa20/20 keystream XOR (16-byte key, "expand 16-byte k") → N plaintext bytes
//! ```

pub mod catalog;
pub mod envelope;
pub mod frame;
pub mod keyfile;
pub mod keys;
pub mod registry;
pub mod salsa20;
pub mod session;

pub use envelope::{Algorithm, FrameEnvelope};
pub use frame::{decrypt_frame, decrypt_frame_to_vec, direct_copy, seal_frame};
pub use keyfile::{load_key_file, parse_key_list};
pub use keys::EncryptionKey;
pub use registry::KeyRegistry;
pub use salsa20::Salsa20;
pub use session::Session;

pub use casc_core::types::{IV_SIZE, KEY_SIZE};
