//! Frame envelope: the header that precedes the ciphertext of an encrypted frame
//!
//! ```text
//! byte  0       : key name size   (0 or 8)
//! bytes 1..n    : key name        (little-endian, zero-extended to 8 bytes)
//! byte  n+1     : IV size         (4 or 8)
//! bytes n+2..m  : IV              (zero-padded to 8 bytes)
//! byte  m+1     : algorithm tag   ('S' = Salsa20, 'A' = reserved)
//! bytes m+2..   : ciphertext
//! ```
//!
//! Every header field must be followed by at least one more byte, since the
//! algorithm tag always closes the header. The ciphertext itself may be empty.

use casc_core::{CascError, CascResult, FrameIndex, KeyName};

use crate::IV_SIZE;

/// Algorithm tag for Salsa20
pub const TAG_SALSA20: u8 = b'S';

/// Algorithm tag that the format reserves but never defines
pub const TAG_RESERVED: u8 = b'A';

/// Cipher selected by the envelope's algorithm tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Salsa20,
}

impl Algorithm {
    pub fn from_tag(tag: u8) -> CascResult<Self> {
        match tag {
            TAG_SALSA20 => Ok(Algorithm::Salsa20),
            TAG_RESERVED => Err(CascError::UnsupportedFormat(
                "algorithm 'A' is reserved and has no decryptor".into(),
            )),
            other => Err(CascError::UnsupportedFormat(format!(
                "unknown algorithm tag 0x{other:02X}"
            ))),
        }
    }

    pub fn tag(self) -> u8 {
        match self {
            Algorithm::Salsa20 => TAG_SALSA20,
        }
    }
}

/// Parsed frame envelope. Transient: built once per decrypt call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameEnvelope {
    pub key_name: KeyName,
    /// Number of key name bytes stored in the header (0 or 8)
    pub key_name_size: u8,
    /// Base IV, zero-padded to 8 bytes
    pub iv: [u8; IV_SIZE],
    /// Number of IV bytes stored in the header (4 or 8)
    pub iv_size: u8,
    pub algorithm: Algorithm,
}

impl FrameEnvelope {
    /// Build a Salsa20 envelope naming `key_name`. The IV must be 4 or 8 bytes.
    pub fn salsa20(key_name: KeyName, iv: &[u8]) -> CascResult<Self> {
        let iv_size = match iv.len() {
            4 => 4,
            8 => 8,
            other => {
                return Err(CascError::UnsupportedFormat(format!(
                    "IV size {other} is not 4 or 8"
                )));
            }
        };

        let mut padded = [0u8; IV_SIZE];
        padded[..iv.len()].copy_from_slice(iv);

        Ok(Self {
            key_name,
            key_name_size: 8,
            iv: padded,
            iv_size,
            algorithm: Algorithm::Salsa20,
        })
    }

    /// Parse the envelope at the start of `frame`, returning it with the ciphertext.
    pub fn parse(frame: &[u8]) -> CascResult<(Self, &[u8])> {
        let (key_name_size, rest) = take_byte(frame, "key name size")?;
        if key_name_size != 0 && key_name_size != 8 {
            return Err(CascError::UnsupportedFormat(format!(
                "key name size {key_name_size} is not 0 or 8"
            )));
        }

        let (name_bytes, rest) = take_field(rest, key_name_size, "key name")?;
        let mut name = [0u8; 8];
        name[..name_bytes.len()].copy_from_slice(name_bytes);

        let (iv_size, rest) = take_byte(rest, "IV size")?;
        let iv_size = check_iv_size(iv_size)?;

        let (iv_bytes, rest) = take_field(rest, iv_size, "initialization vector")?;
        let mut iv = [0u8; IV_SIZE];
        iv[..iv_bytes.len()].copy_from_slice(iv_bytes);

        let (tag, ciphertext) = take_byte(rest, "algorithm tag")?;
        let algorithm = Algorithm::from_tag(tag)?;

        let envelope = Self {
            key_name: KeyName::from_le_bytes(name),
            key_name_size,
            iv,
            iv_size,
            algorithm,
        };
        Ok((envelope, ciphertext))
    }

    /// Append the encoded header to `out`.
    pub fn encode(&self, out: &mut Vec<u8>) {
        out.reserve(self.header_len());
        let name = self.key_name.to_le_bytes();
        out.push(self.key_name_size);
        out.extend_from_slice(&name[..usize::from(self.key_name_size)]);
        out.push(self.iv_size);
        out.extend_from_slice(&self.iv[..usize::from(self.iv_size)]);
        out.push(self.algorithm.tag());
    }

    /// Encoded size of the header in bytes.
    pub fn header_len(&self) -> usize {
        3 + usize::from(self.key_name_size) + usize::from(self.iv_size)
    }

    /// The IV for a specific frame: the first four bytes of the base IV are
    /// XORed with the little-endian bytes of `frame_index`.
    pub fn frame_iv(&self, frame_index: FrameIndex) -> [u8; IV_SIZE] {
        let mut iv = self.iv;
        for (byte, index_byte) in iv.iter_mut().zip(frame_index.to_le_bytes()) {
            *byte ^= index_byte;
        }
        iv
    }
}

fn check_iv_size(iv_size: u8) -> CascResult<u8> {
    match iv_size {
        4 | 8 => Ok(iv_size),
        other => Err(CascError::UnsupportedFormat(format!(
            "IV size {other} is not 4 or 8"
        ))),
    }
}

fn take_byte<'a>(input: &'a [u8], field: &'static str) -> CascResult<(u8, &'a [u8])> {
    match input.split_first() {
        Some((&byte, rest)) => Ok((byte, rest)),
        None => Err(CascError::FileCorrupt { field }),
    }
}

/// Split off a `len`-byte field that must be followed by at least one more header byte.
fn take_field<'a>(
    input: &'a [u8],
    len: u8,
    field: &'static str,
) -> CascResult<(&'a [u8], &'a [u8])> {
    let len = usize::from(len);
    if input.len() <= len {
        return Err(CascError::FileCorrupt { field });
    }
    Ok(input.split_at(len))
}
