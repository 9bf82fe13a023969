//! Apache APR1-MD5 password digest.
//!
//! This module implements the APR1-MD5 digest used by Apache's htpasswd tool
//! and `openssl passwd -apr1`. The format is: `$apr1$salt$hash`
//!
//! # Algorithm Source
//!
//! The construction follows the Apache Portable Runtime (APR) library's
//! `apr_md5_encode()` from `crypto/apr_md5.c`, itself derived from the
//! FreeBSD 3.0 MD5 crypt() function (Beer-Ware License).
//!
//! Key references:
//! - Apache APR: https://github.com/apache/apr-util/blob/master/crypto/apr_md5.c
//! - Apache password formats: https://httpd.apache.org/docs/2.4/misc/password_encryptions.html
//!
//! # Security Warning
//!
//! MD5 is cryptographically broken. This implementation is provided for
//! compatibility with existing Apache htpasswd files only.

use crate::digest;
use crate::encoding::{self, CRYPT_ALPHABET};
use crate::error::{Error, ParseSnafu, PasswordEmptySnafu, Result};
use snafu::{OptionExt, ensure};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};
use zeroize::Zeroizing;

/// APR1-MD5 magic string. Prefixes every digest and is hashed into Digest-A.
pub const MAGIC: &str = "$apr1$";

/// Number of MD5 rounds in the mixing stage.
pub const ROUNDS: usize = 1000;

/// Length of the encoded hash segment.
pub const HASH_LEN: usize = 22;

/// A computed or parsed `$apr1$salt$hash` digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Apr1Hash {
    salt: String,
    hash: String,
}

impl Apr1Hash {
    /// The salt segment, verbatim.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// The 22-character hash segment.
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl fmt::Display for Apr1Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}${}", MAGIC, self.salt, self.hash)
    }
}

impl FromStr for Apr1Hash {
    type Err = Error;

    /// Split an `$apr1$salt$hash` string into its segments.
    ///
    /// The hash segment never contains `$`, so the salt is everything between
    /// the prefix and the last `$`.
    fn from_str(s: &str) -> Result<Self> {
        let rest = s.strip_prefix(MAGIC).context(ParseSnafu {
            reason: "missing $apr1$ prefix",
        })?;
        let (salt, hash) = rest.rsplit_once('$').context(ParseSnafu {
            reason: "missing '$' between salt and hash",
        })?;
        ensure!(
            hash.len() == HASH_LEN,
            ParseSnafu {
                reason: "hash segment must be 22 characters",
            }
        );
        ensure!(
            hash.bytes().all(|b| CRYPT_ALPHABET.contains(&b)),
            ParseSnafu {
                reason: "hash segment contains a character outside ./0-9A-Za-z",
            }
        );

        Ok(Apr1Hash {
            salt: salt.to_string(),
            hash: hash.to_string(),
        })
    }
}

/// Hash a password with the given salt using APR1-MD5.
///
/// Returns the full `$apr1$salt$hash` string. See [`encode_hash`].
pub fn encode(password: impl AsRef<[u8]>, salt: &str) -> Result<String> {
    encode_hash(password, salt).map(|hash| hash.to_string())
}

/// Hash a password with the given salt using APR1-MD5.
///
/// # Arguments
///
/// * `password` - The password bytes; must not be empty
/// * `salt` - The salt, copied into the output verbatim (no truncation).
///   Conventionally 8 characters from `./0-9A-Za-z`; it should not contain `$`
///
/// # Algorithm
///
/// 1. B = MD5(password + salt + password)
/// 2. A = MD5(password + "$apr1$" + salt + B repeated to the password length
///    + a NUL or the first password byte for each bit of the password length)
/// 3. 1000 rounds, each C = MD5(conditional password/salt/C):
///    - If i is odd: start with password, else C
///    - If i % 3 != 0: add salt
///    - If i % 7 != 0: add password
///    - If i is odd: end with C, else password
/// 4. Transpose C, base64-encode, reverse, map onto the crypt alphabet
///
/// # Errors
///
/// [`Error::PasswordEmpty`] if `password` is empty.
pub fn encode_hash(password: impl AsRef<[u8]>, salt: &str) -> Result<Apr1Hash> {
    let password = password.as_ref();
    if password.is_empty() {
        debug!("Rejecting empty password");
        return PasswordEmptySnafu.fail();
    }
    trace!(
        password_len = password.len(),
        salt_len = salt.len(),
        "Computing APR1-MD5 digest"
    );

    let salt_bytes = salt.as_bytes();
    let seed = Zeroizing::new(digest::seed(password, salt_bytes));
    let primary = Zeroizing::new(digest::primary(password, salt_bytes, &seed)?);
    let mixed = digest::mix(password, salt_bytes, &primary);
    let hash = encoding::encode_digest(&mixed)?;

    Ok(Apr1Hash {
        salt: salt.to_string(),
        hash,
    })
}
