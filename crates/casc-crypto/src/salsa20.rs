//! Salsa20/20 keystream generator
//!
//! State layout (16 little-endian words):
//! ```text
//!  0: const[0]   1: key[0]    2: key[1]    3: key[2]
//!  4: key[3]     5: const[1]  6: iv[0]     7: iv[1]
//!  8: block_lo   9: block_hi 10: const[2] 11: key[4]
//! 12: key[5]    13: key[6]   14: key[7]   15: const[3]
//! ```
//!
//! Frame keys are 16 bytes, so words 11..=14 repeat words 1..=4 and the
//! constants are `"expand 16-byte k"`. The 32-byte layout is kept for
//! completeness but the frame envelope never selects it.

use zeroize::Zeroize;

use crate::{IV_SIZE, KEY_SIZE};

/// Size of one keystream block in bytes
pub const BLOCK_SIZE: usize = 64;

/// Number of rounds applied to each block (10 double rounds)
pub const ROUNDS: usize = 20;

const SIGMA: &[u8; 16] = b"expand 32-byte k";
const TAU: &[u8; 16] = b"expand 16-byte k";

/// Salsa20 cipher state for a single key/IV pair.
///
/// Encryption and decryption are the same keystream XOR. The block counter
/// starts at zero and advances once per started 64-byte block.
pub struct Salsa20 {
    state: [u32; 16],
}

impl Salsa20 {
    /// Initialize with a 128-bit key and a 64-bit IV.
    pub fn new(key: &[u8; KEY_SIZE], iv: &[u8; IV_SIZE]) -> Self {
        Self::init(TAU, key, key, iv)
    }

    /// Initialize with a 256-bit key and a 64-bit IV.
    pub fn new_256(key: &[u8; 32], iv: &[u8; IV_SIZE]) -> Self {
        let (low, high) = key.split_at(KEY_SIZE);
        Self::init(SIGMA, low, high, iv)
    }

    fn init(constants: &[u8; 16], key_low: &[u8], key_high: &[u8], iv: &[u8; IV_SIZE]) -> Self {
        let mut state = [0u32; 16];
        state[0] = le_word(constants, 0);
        state[1] = le_word(key_low, 0);
        state[2] = le_word(key_low, 4);
        state[3] = le_word(key_low, 8);
        state[4] = le_word(key_low, 12);
        state[5] = le_word(constants, 4);
        state[6] = le_word(iv, 0);
        state[7] = le_word(iv, 4);
        state[10] = le_word(constants, 8);
        state[11] = le_word(key_high, 0);
        state[12] = le_word(key_high, 4);
        state[13] = le_word(key_high, 8);
        state[14] = le_word(key_high, 12);
        state[15] = le_word(constants, 12);
        Self { state }
    }

    /// Index of the next keystream block.
    pub fn block_counter(&self) -> u64 {
        (u64::from(self.state[9]) << 32) | u64::from(self.state[8])
    }

    /// Position the keystream at the start of `block`.
    pub fn seek_block(&mut self, block: u64) {
        self.state[8] = block as u32;
        self.state[9] = (block >> 32) as u32;
    }

    /// XOR `input` with the keystream into `output`.
    ///
    /// # Panics
    /// Panics if `output` is shorter than `input`.
    pub fn apply_keystream(&mut self, input: &[u8], output: &mut [u8]) {
        assert!(
            output.len() >= input.len(),
            "keystream output buffer too small: {} < {}",
            output.len(),
            input.len()
        );

        let mut keystream = [0u8; BLOCK_SIZE];
        for (src, dst) in input
            .chunks(BLOCK_SIZE)
            .zip(output[..input.len()].chunks_mut(BLOCK_SIZE))
        {
            self.next_block(&mut keystream);
            for ((out, byte), key) in dst.iter_mut().zip(src).zip(&keystream) {
                *out = byte ^ key;
            }
        }
        keystream.zeroize();
    }

    /// XOR `data` with the keystream in place.
    pub fn apply_keystream_in_place(&mut self, data: &mut [u8]) {
        let mut keystream = [0u8; BLOCK_SIZE];
        for chunk in data.chunks_mut(BLOCK_SIZE) {
            self.next_block(&mut keystream);
            for (byte, key) in chunk.iter_mut().zip(&keystream) {
                *byte ^= key;
            }
        }
        keystream.zeroize();
    }

    /// Produce the keystream block for the current counter, then advance it.
    fn next_block(&mut self, out: &mut [u8; BLOCK_SIZE]) {
        let mut working = self.state;
        for _ in 0..ROUNDS / 2 {
            double_round(&mut working);
        }

        for (i, chunk) in out.chunks_exact_mut(4).enumerate() {
            chunk.copy_from_slice(&working[i].wrapping_add(self.state[i]).to_le_bytes());
        }
        working.zeroize();

        self.state[8] = self.state[8].wrapping_add(1);
        if self.state[8] == 0 {
            self.state[9] = self.state[9].wrapping_add(1);
        }
    }
}

impl Drop for Salsa20 {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

impl std::fmt::Debug for Salsa20 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Salsa20")
            .field("state", &"[REDACTED]")
            .field("block_counter", &self.block_counter())
            .finish()
    }
}

#[inline]
fn le_word(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[inline]
fn quarter_round(x: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    x[b] ^= x[a].wrapping_add(x[d]).rotate_left(7);
    x[c] ^= x[b].wrapping_add(x[a]).rotate_left(9);
    x[d] ^= x[c].wrapping_add(x[b]).rotate_left(13);
    x[a] ^= x[d].wrapping_add(x[c]).rotate_left(18);
}

#[inline]
fn double_round(x: &mut [u32; 16]) {
    // columns
    quarter_round(x, 0, 4, 8, 12);
    quarter_round(x, 5, 9, 13, 1);
    quarter_round(x, 10, 14, 2, 6);
    quarter_round(x, 15, 3, 7, 11);
    // rows
    quarter_round(x, 0, 1, 2, 3);
    quarter_round(x, 5, 6, 7, 4);
    quarter_round(x, 10, 11, 8, 9);
    quarter_round(x, 15, 12, 13, 14);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::salsa20::cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};
    use proptest::prelude::*;

    fn keystream(key: &[u8; KEY_SIZE], iv: &[u8; IV_SIZE], len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        Salsa20::new(key, iv).apply_keystream_in_place(&mut out);
        out
    }

    fn unhex(s: &str) -> Vec<u8> {
        hex::decode(s).unwrap()
    }

    #[test]
    fn test_all_zero_key_and_iv_block() {
        let expected = unhex(
            "6513adaecfeb124c1cbe6bdaef690b4ffb00b0fcace33ce806792bb414801998\
             34bfb1cfdd095802c6e95e251002989ac22ae588d32ae79320d9bd7732e00338",
        );
        assert_eq!(keystream(&[0u8; 16], &[0u8; 8], 64), expected);
    }

    #[test]
    fn test_ecrypt_128bit_set1_vector0() {
        let mut key = [0u8; 16];
        key[0] = 0x80;
        let expected = unhex(
            "4dfa5e481da23ea09a31022050859936da52fcee218005164f267cb65f5cfd7f\
             2b4f97e0ff16924a52df269515110a07f9e460bc65ef95da58f740b7d1dbb0aa",
        );
        assert_eq!(keystream(&key, &[0u8; 8], 64), expected);
    }

    #[test]
    fn test_block_counter_advances_per_started_block() {
        let key = [7u8; 16];
        let iv = [9u8; 8];
        for (len, blocks) in [(1, 1), (63, 1), (64, 1), (65, 2), (128, 2), (129, 3)] {
            let mut cipher = Salsa20::new(&key, &iv);
            let mut data = vec![0u8; len];
            cipher.apply_keystream_in_place(&mut data);
            assert_eq!(cipher.block_counter(), blocks, "input length {len}");
        }
    }

    #[test]
    fn test_partial_block_is_prefix_of_full_keystream() {
        let key = [0x42u8; 16];
        let iv = [0x24u8; 8];
        let full = keystream(&key, &iv, 192);

        for len in [1, 63, 64, 65, 128, 129] {
            assert_eq!(keystream(&key, &iv, len), full[..len], "input length {len}");
        }
    }

    #[test]
    fn test_empty_input_consumes_no_block() {
        let mut cipher = Salsa20::new(&[1u8; 16], &[2u8; 8]);
        cipher.apply_keystream(&[], &mut []);
        assert_eq!(cipher.block_counter(), 0);
    }

    #[test]
    fn test_output_buffer_may_be_larger() {
        let input = b"partial";
        let mut output = [0xEEu8; 16];
        Salsa20::new(&[0u8; 16], &[0u8; 8]).apply_keystream(input, &mut output);

        let expected = keystream(&[0u8; 16], &[0u8; 8], input.len());
        for i in 0..input.len() {
            assert_eq!(output[i], input[i] ^ expected[i]);
        }
        assert!(output[input.len()..].iter().all(|&b| b == 0xEE));
    }

    #[test]
    #[should_panic(expected = "keystream output buffer too small")]
    fn test_output_buffer_too_small_panics() {
        let mut output = [0u8; 3];
        Salsa20::new(&[0u8; 16], &[0u8; 8]).apply_keystream(b"four", &mut output);
    }

    #[test]
    fn test_256bit_key_matches_reference_crate() {
        let key: [u8; 32] = std::array::from_fn(|i| i as u8);
        let iv = [0xA5u8; 8];
        let plaintext: Vec<u8> = (0..200u32).map(|i| (i * 31) as u8).collect();

        let mut ours = vec![0u8; plaintext.len()];
        Salsa20::new_256(&key, &iv).apply_keystream(&plaintext, &mut ours);

        let mut theirs = plaintext.clone();
        ::salsa20::Salsa20::new(&key.into(), &iv.into()).apply_keystream(&mut theirs);

        assert_eq!(ours, theirs);
    }

    #[test]
    fn test_block_counter_carries_into_high_word() {
        let key: [u8; 32] = [0x3Cu8; 32];
        let iv = [0x11u8; 8];

        let mut ours = Salsa20::new_256(&key, &iv);
        ours.seek_block(0xFFFF_FFFF);
        let mut data = vec![0u8; 128];
        ours.apply_keystream_in_place(&mut data);
        assert_eq!(ours.block_counter(), 0x1_0000_0001);

        let mut reference = ::salsa20::Salsa20::new(&key.into(), &iv.into());
        reference.seek(0xFFFF_FFFFu64 * BLOCK_SIZE as u64);
        let mut expected = vec![0u8; 128];
        reference.apply_keystream(&mut expected);

        assert_eq!(data, expected);
    }

    proptest! {
        #[test]
        fn keystream_is_self_inverse(
            key in any::<[u8; 16]>(),
            iv in any::<[u8; 8]>(),
            data in proptest::collection::vec(any::<u8>(), 0..=600),
        ) {
            let mut ciphertext = vec![0u8; data.len()];
            Salsa20::new(&key, &iv).apply_keystream(&data, &mut ciphertext);
            let mut roundtrip = vec![0u8; data.len()];
            Salsa20::new(&key, &iv).apply_keystream(&ciphertext, &mut roundtrip);
            prop_assert_eq!(roundtrip, data);
        }

        #[test]
        fn in_place_matches_copying(
            key in any::<[u8; 16]>(),
            iv in any::<[u8; 8]>(),
            data in proptest::collection::vec(any::<u8>(), 0..=300),
        ) {
            let mut copied = vec![0u8; data.len()];
            Salsa20::new(&key, &iv).apply_keystream(&data, &mut copied);
            let mut in_place = data.clone();
            Salsa20::new(&key, &iv).apply_keystream_in_place(&mut in_place);
            prop_assert_eq!(copied, in_place);
        }
    }
}
