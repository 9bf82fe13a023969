//! The three chained MD5 stages of APR1.
//!
//! Each stage consumes the previous stage's 16-byte output plus the original
//! password and salt. The byte sequence fed to every MD5 invocation must match
//! Apache's `apr_md5_encode()` exactly, so none of these functions take
//! shortcuts over the branch structure.

use crate::apr1_md5::{MAGIC, ROUNDS};
use crate::error::{PasswordEmptySnafu, Result};
use md5::{Digest, Md5};
use snafu::OptionExt;
use zeroize::Zeroizing;

/// Size of an MD5 output in bytes.
pub(crate) const DIGEST_LEN: usize = 16;

/// Digest-B: `MD5(password || salt || password)`.
pub(crate) fn seed(password: &[u8], salt: &[u8]) -> [u8; DIGEST_LEN] {
    Md5::new()
        .chain_update(password)
        .chain_update(salt)
        .chain_update(password)
        .finalize()
        .into()
}

/// Digest-A: `MD5(password || "$apr1$" || salt || B-expansion || length bits)`.
///
/// The B-expansion is `seed` cycled and cut to exactly `password.len()` bytes.
/// The length bits walk `password.len()` from the least significant bit up,
/// feeding a NUL for every set bit and the first password byte otherwise.
pub(crate) fn primary(
    password: &[u8],
    salt: &[u8],
    seed: &[u8; DIGEST_LEN],
) -> Result<[u8; DIGEST_LEN]> {
    let &first = password.first().context(PasswordEmptySnafu)?;

    let mut hasher = Md5::new()
        .chain_update(password)
        .chain_update(MAGIC)
        .chain_update(salt);

    let expansion: Zeroizing<Vec<u8>> =
        Zeroizing::new(seed.iter().copied().cycle().take(password.len()).collect());
    hasher.update(expansion.as_slice());

    let mut bits = password.len();
    while bits > 0 {
        if bits & 1 == 1 {
            hasher.update([0u8]);
        } else {
            hasher.update([first]);
        }
        bits >>= 1;
    }

    Ok(hasher.finalize().into())
}

/// Digest-C: the full mixing loop over [`ROUNDS`] rounds.
pub(crate) fn mix(
    password: &[u8],
    salt: &[u8],
    primary: &[u8; DIGEST_LEN],
) -> Zeroizing<[u8; DIGEST_LEN]> {
    mix_rounds(password, salt, primary, ROUNDS)
}

fn mix_rounds(
    password: &[u8],
    salt: &[u8],
    primary: &[u8; DIGEST_LEN],
    rounds: usize,
) -> Zeroizing<[u8; DIGEST_LEN]> {
    let mut running = Zeroizing::new(*primary);

    for round in 0..rounds {
        let odd = round & 1 == 1;
        let mut hasher = Md5::new();

        if odd {
            hasher.update(password);
        } else {
            hasher.update(running.as_slice());
        }

        if round % 3 != 0 {
            hasher.update(salt);
        }

        if round % 7 != 0 {
            hasher.update(password);
        }

        if odd {
            hasher.update(running.as_slice());
        } else {
            hasher.update(password);
        }

        *running = hasher.finalize().into();
    }

    running
}
