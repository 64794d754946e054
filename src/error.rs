// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Incorrect API usage errors (programmer error)
    //------------------------------
    /// The optstring contains a character that is neither an ASCII
    /// alphanumeric nor `:`. No scanner is created.
    #[error("invalid optstring character: {0:?}")]
    InvalidGrammar(char),

    /// `decode()` was called when no option was pending, either because
    /// `advance()` was not called first or because it returned `false`.
    ///
    /// Unlike the runtime errors, this does not stop the scanner.
    #[error("no option to decode")]
    NoOption,

    //------------------------------
    // Runtime errors (user error)
    //------------------------------
    /// User specified an option that is not in the optstring.
    #[error("unknown option: -{0}")]
    InvalidOption(char),

    /// An option that needs an argument was the last thing on the
    /// command-line.
    #[error("option -{0} requires an argument")]
    MissingArgument(char),
}

impl Error {
    /// Returns `true` if the error permanently stops the scanner.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Error::InvalidOption(_) | Error::MissingArgument(_))
    }
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
