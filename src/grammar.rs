// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

use crate::error::{Error, Result};

/// Marks the preceding option as taking an argument (and, when doubled, as
/// taking an optional argument). As the first character of an optstring it
/// makes every option argument optional.
const ARG_MARKER: char = ':';

const OPT_PREFIX: char = '-';

/// Used to specify whether an option is a "stand-alone" flag option
/// (needs no value), or whether it takes an option argument.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy)]
pub enum Need {
    /// Option is stand-alone (no argument). Declared as `a`.
    Nothing,
    /// Option needs an argument. Declared as `a:`.
    Argument,
    /// Option may have an argument. Declared as `a::`.
    Optional,
}

impl Default for Need {
    fn default() -> Self {
        Need::Nothing
    }
}

impl Need {
    /// Create a new default requirement.
    pub fn new() -> Self {
        Need::default()
    }

    /// Returns `true` for options that can carry an argument.
    pub fn takes_arg(self) -> bool {
        self != Need::Nothing
    }
}

/// A single option declared in an optstring.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct OptionSpec {
    /// Single character short option name.
    pub option: char,
    /// Argument policy for the option.
    pub needs: Need,
}

impl OptionSpec {
    /// Create a new option spec.
    pub fn new(option: char, needs: Need) -> Self {
        OptionSpec { option, needs }
    }
}

impl fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = match self.needs {
            Need::Nothing => "",
            Need::Argument => " <value>",
            Need::Optional => " [<value>]",
        };

        write!(f, "{}{}{}", OPT_PREFIX, self.option, value)
    }
}

/// The compiled form of an optstring.
///
/// Specs are kept in declaration order and duplicates are not removed:
/// lookups return the first spec declared for a character.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Grammar {
    specs: Vec<OptionSpec>,
    optional_args: bool,
}

impl Grammar {
    /// Compile an optstring.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidGrammar] for the first character that is
    /// neither an ASCII alphanumeric nor `:`.
    pub fn new(optstring: &str) -> Result<Self> {
        if let Some(c) = optstring
            .chars()
            .find(|c| !is_option_char(*c) && *c != ARG_MARKER)
        {
            return Err(Error::InvalidGrammar(c));
        }

        let chars: Vec<char> = optstring.chars().collect();

        let optional_args = chars.first() == Some(&ARG_MARKER);

        let mut specs = Vec::<OptionSpec>::new();
        let mut i = if optional_args { 1 } else { 0 };

        while i < chars.len() {
            let option = chars[i];
            i += 1;

            // Stray marker with no option before it.
            if option == ARG_MARKER {
                continue;
            }

            let markers = chars[i..]
                .iter()
                .take_while(|c| **c == ARG_MARKER)
                .count();

            let needs = match markers {
                0 => Need::Nothing,
                1 => Need::Argument,
                _ => Need::Optional,
            };

            specs.push(OptionSpec::new(option, needs));
            i += markers;
        }

        tracing::debug!(
            optstring,
            options = specs.len(),
            optional_args,
            "compiled grammar"
        );

        Ok(Grammar {
            specs,
            optional_args,
        })
    }

    /// All option specs, in declaration order.
    pub fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    /// Returns `true` if the optstring started with `:`, meaning a missing
    /// option argument is never an error.
    pub fn global_optional_args(&self) -> bool {
        self.optional_args
    }

    /// Find the first spec declared for `option`.
    pub fn lookup(&self, option: char) -> Option<&OptionSpec> {
        self.specs.iter().find(|spec| spec.option == option)
    }

    /// The policy actually applied when decoding `spec`: with the global
    /// fallback every required argument is treated as optional.
    pub(crate) fn effective_need(&self, spec: &OptionSpec) -> Need {
        match spec.needs {
            Need::Argument if self.optional_args => Need::Optional,
            needs => needs,
        }
    }
}

/// Option names are restricted to ASCII letters and digits.
pub(crate) fn is_option_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}
