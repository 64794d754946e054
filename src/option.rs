// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

/// An option found on the command-line.
///
/// # Note
///
/// - All members are public for caller convenience.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ParsedOption {
    /// Single character short option name.
    pub option: char,

    /// Option argument, if any.
    ///
    /// # Notes
    ///
    /// - This is equivalent to `getopt(3)`'s `optarg` value.
    /// - An empty argument (`-a ""`) is stored as [None]: callers cannot
    ///   tell it apart from an option given without a value.
    pub value: Option<String>,
}

impl ParsedOption {
    /// Create an option with no argument.
    pub fn new(option: char) -> Self {
        ParsedOption {
            option,
            value: None,
        }
    }

    /// Create an option with an argument. An empty `value` is stored as
    /// "no argument".
    pub fn with_value<S: Into<String>>(option: char, value: S) -> Self {
        let value: String = value.into();

        ParsedOption {
            option,
            value: if value.is_empty() { None } else { Some(value) },
        }
    }

    /// Returns `true` if the option has an argument.
    pub fn has_arg(&self) -> bool {
        self.value.is_some()
    }

    /// The option argument, if any.
    pub fn arg(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The option argument, or the empty string if there is none.
    pub fn arg_or_empty(&self) -> &str {
        self.arg().unwrap_or("")
    }

    /// Parse the option argument as any [FromStr] type.
    ///
    /// An absent argument is parsed as the empty string, so numeric
    /// types will fail with their usual "empty string" error.
    pub fn parse<T: FromStr>(&self) -> Result<T, T::Err> {
        self.arg_or_empty().parse::<T>()
    }

    /// Parse the option argument as a base-10 `isize`.
    pub fn to_int(&self) -> Result<isize, ParseIntError> {
        self.parse()
    }

    /// Parse the option argument as a base-10 `i32`.
    pub fn to_i32(&self) -> Result<i32, ParseIntError> {
        self.parse()
    }

    /// Parse the option argument as a base-10 `i64`.
    pub fn to_i64(&self) -> Result<i64, ParseIntError> {
        self.parse()
    }

    /// Parse the option argument as a base-10 `usize`.
    pub fn to_uint(&self) -> Result<usize, ParseIntError> {
        self.parse()
    }

    /// Parse the option argument as a base-10 `u32`.
    pub fn to_u32(&self) -> Result<u32, ParseIntError> {
        self.parse()
    }

    /// Parse the option argument as a base-10 `u64`.
    pub fn to_u64(&self) -> Result<u64, ParseIntError> {
        self.parse()
    }

    /// Parse the option argument as an `f32`.
    pub fn to_f32(&self) -> Result<f32, ParseFloatError> {
        self.parse()
    }

    /// Parse the option argument as an `f64`.
    pub fn to_f64(&self) -> Result<f64, ParseFloatError> {
        self.parse()
    }
}

/// Displays the option argument (nothing for an option without one).
impl fmt::Display for ParsedOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.arg_or_empty())
    }
}
