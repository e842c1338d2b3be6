use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Size of a frame encryption key in bytes (128-bit)
pub const KEY_SIZE: usize = 16;

/// Size of the zero-padded initialization vector handed to the cipher
pub const IV_SIZE: usize = 8;

/// Default number of keys that may be added to a session at runtime
pub const DEFAULT_EXTRA_KEYS: usize = 0x80;

/// Sequence number of a frame within its parent file
pub type FrameIndex = u32;

/// Opaque 64-bit identifier of an encryption key.
///
/// Displayed as 16 upper-case hex digits, the way key lists publish them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyName(pub u64);

impl KeyName {
    /// Build a key name from the little-endian bytes stored in a frame envelope.
    pub fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_le_bytes(bytes))
    }

    pub fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl From<u64> for KeyName {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}", self.0)
    }
}

impl FromStr for KeyName {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        u64::from_str_radix(digits, 16).map(KeyName)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_padded_upper_hex() {
        assert_eq!(KeyName(0xFA505078126ACB3E).to_string(), "FA505078126ACB3E");
        assert_eq!(KeyName(0x1).to_string(), "0000000000000001");
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        let a: KeyName = "0xFA505078126ACB3E".parse().unwrap();
        let b: KeyName = "fa505078126acb3e".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.0, 0xFA505078126ACB3E);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-a-key".parse::<KeyName>().is_err());
        assert!("".parse::<KeyName>().is_err());
    }

    #[test]
    fn test_le_bytes_roundtrip() {
        let name = KeyName(0x0102030405060708);
        assert_eq!(name.to_le_bytes(), [8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(KeyName::from_le_bytes(name.to_le_bytes()), name);
    }
}
