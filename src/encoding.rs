//! Transposition and crypt-alphabet encoding of the mixing digest.
//!
//! The final digest is reordered through a fixed permutation, framed behind
//! two NUL bytes, base64-encoded with the standard alphabet, reversed, and
//! mapped character by character onto the crypt alphabet. The result is the
//! same 22 characters Apache's `to64()` produces.

use crate::digest::DIGEST_LEN;
use crate::error::{EncodingSnafu, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use zeroize::Zeroizing;

/// The crypt (itoa64) alphabet: `./0-9A-Za-z`.
pub const CRYPT_ALPHABET: &[u8; 64] =
    b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const STANDARD_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Source digest indices, in output order, following the NUL prefix.
const TRANSPOSE: [usize; DIGEST_LEN] = [11, 4, 10, 5, 3, 9, 15, 2, 8, 14, 1, 7, 13, 0, 6, 12];

/// Leading NUL bytes; their encoding is dropped from the output.
const PREFIX_LEN: usize = 2;

const UNMAPPED: u8 = 0;

/// Standard base64 character -> crypt alphabet character.
static SUBSTITUTION: [u8; 256] = build_substitution();

const fn build_substitution() -> [u8; 256] {
    let mut table = [UNMAPPED; 256];
    let mut i = 0;
    while i < STANDARD_ALPHABET.len() {
        table[STANDARD_ALPHABET[i] as usize] = CRYPT_ALPHABET[i];
        i += 1;
    }
    table
}

fn transpose(digest: &[u8; DIGEST_LEN]) -> [u8; PREFIX_LEN + DIGEST_LEN] {
    let mut buf = [0u8; PREFIX_LEN + DIGEST_LEN];
    for (slot, &index) in buf[PREFIX_LEN..].iter_mut().zip(TRANSPOSE.iter()) {
        *slot = digest[index];
    }
    buf
}

fn substitute(byte: u8) -> Result<char> {
    match SUBSTITUTION[usize::from(byte)] {
        UNMAPPED => EncodingSnafu {
            character: char::from(byte),
        }
        .fail(),
        mapped => Ok(char::from(mapped)),
    }
}

/// Encode the mixing digest into the 22-character hash segment.
pub(crate) fn encode_digest(digest: &[u8; DIGEST_LEN]) -> Result<String> {
    let framed = Zeroizing::new(transpose(digest));
    let encoded = Zeroizing::new(STANDARD.encode(framed.as_slice()));

    encoded
        .bytes()
        .skip(PREFIX_LEN)
        .rev()
        .map(substitute)
        .collect()
}
