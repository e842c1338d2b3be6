//! Per-frame decryption and the passthrough path for unencrypted frames
//!
//! A decrypted frame is exactly as long as its ciphertext: the envelope is
//! consumed, never copied to the output. On error the output buffer contents
//! are unspecified; `KeyNotFound` is detected before anything is written.

use casc_core::{CascError, CascResult, FrameIndex};

use crate::envelope::{Algorithm, FrameEnvelope};
use crate::registry::KeyRegistry;
use crate::salsa20::Salsa20;

/// Decrypt one encrypted frame (`envelope || ciphertext`) into `output`.
///
/// - `frame_index`: position of this frame within its file; it perturbs the
///   IV so frames sharing a key and base IV never share keystream.
///
/// Returns the number of plaintext bytes written.
pub fn decrypt_frame(
    registry: &KeyRegistry,
    input: &[u8],
    output: &mut [u8],
    frame_index: FrameIndex,
) -> CascResult<usize> {
    let (envelope, ciphertext) = FrameEnvelope::parse(input)?;

    if ciphertext.len() > output.len() {
        return Err(CascError::InsufficientBuffer {
            needed: ciphertext.len(),
            available: output.len(),
        });
    }

    let key = registry
        .lookup(envelope.key_name)
        .ok_or(CascError::KeyNotFound(envelope.key_name))?;

    let iv = envelope.frame_iv(frame_index);
    match envelope.algorithm {
        Algorithm::Salsa20 => Salsa20::new(key, &iv).apply_keystream(ciphertext, output),
    }

    tracing::debug!(
        key = %envelope.key_name,
        frame_index,
        header = envelope.header_len(),
        bytes = ciphertext.len(),
        "decrypted frame"
    );
    Ok(ciphertext.len())
}

/// Decrypt one encrypted frame into a freshly allocated buffer.
pub fn decrypt_frame_to_vec(
    registry: &KeyRegistry,
    input: &[u8],
    frame_index: FrameIndex,
) -> CascResult<Vec<u8>> {
    let mut output = vec![0u8; input.len()];
    let written = decrypt_frame(registry, input, &mut output, frame_index)?;
    output.truncate(written);
    Ok(output)
}

/// Encrypt `plaintext` as frame `frame_index` under `envelope`, producing
/// `envelope || ciphertext` that [`decrypt_frame`] accepts.
pub fn seal_frame(
    registry: &KeyRegistry,
    envelope: &FrameEnvelope,
    plaintext: &[u8],
    frame_index: FrameIndex,
) -> CascResult<Vec<u8>> {
    let key = registry
        .lookup(envelope.key_name)
        .ok_or(CascError::KeyNotFound(envelope.key_name))?;

    let mut frame = Vec::with_capacity(envelope.header_len() + plaintext.len());
    envelope.encode(&mut frame);
    let header_len = frame.len();
    frame.extend_from_slice(plaintext);

    let iv = envelope.frame_iv(frame_index);
    match envelope.algorithm {
        Algorithm::Salsa20 => {
            Salsa20::new(key, &iv).apply_keystream_in_place(&mut frame[header_len..])
        }
    }
    Ok(frame)
}

/// Copy an unencrypted frame verbatim. Returns the number of bytes copied.
pub fn direct_copy(input: &[u8], output: &mut [u8]) -> CascResult<usize> {
    if input.len() > output.len() {
        return Err(CascError::InsufficientBuffer {
            needed: input.len(),
            available: output.len(),
        });
    }
    output[..input.len()].copy_from_slice(input);
    Ok(input.len())
}
