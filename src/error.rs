use snafu::Snafu;

/// Errors that can occur while computing or parsing an APR1 digest.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The password is empty.
    ///
    /// The primary digest mixes in the first password byte, so an empty
    /// password has no defined digest.
    #[snafu(display("Password cannot be empty"))]
    PasswordEmpty,

    /// The base64 stage produced a character outside the substitution table.
    #[snafu(display("Character {character:?} has no crypt alphabet mapping"))]
    Encoding {
        /// The offending character.
        character: char,
    },

    /// A string could not be parsed as an `$apr1$salt$hash` digest.
    #[snafu(display("Invalid APR1 hash: {reason}"))]
    Parse {
        /// What was wrong with the input.
        reason: &'static str,
    },
}

/// Result type used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
