#![warn(missing_docs)]

//! Apache APR1-MD5 (`$apr1$`) password digests.
//!
//! This library computes the salted, iterated MD5 digest Apache's htpasswd
//! tool writes for `-m` entries, bit-compatible with `openssl passwd -apr1`.
//! Salt generation, storage, and verification are left to the caller.
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), apr1::Error> {
//! let digest = apr1::encode("password", "F0ajl09F")?;
//! assert_eq!(digest, "$apr1$F0ajl09F$kPBydXR.hZiwsj1TXMMqF.");
//!
//! // Split an existing digest into its salt and hash segments
//! let parsed: apr1::Apr1Hash = digest.parse()?;
//! assert_eq!(parsed.salt(), "F0ajl09F");
//! # Ok(())
//! # }
//! ```

mod apr1_md5;
mod digest;
mod encoding;
mod error;

pub use apr1_md5::{Apr1Hash, HASH_LEN, MAGIC, ROUNDS, encode, encode_hash};
pub use encoding::CRYPT_ALPHABET;
pub use error::{Error, Result};
