// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::borrow::Cow;
use std::env;
use std::ffi::OsStr;
use std::iter::FusedIterator;
use std::path::Path;

use crate::error::{Error, Result};
use crate::grammar::{is_option_char, Grammar, Need};
use crate::option::ParsedOption;

const OPT_PREFIX: char = '-';

/// Special argument that is silently consumed and used to denote the end of
/// all options; all arguments that follow are considered to be positional
/// arguments (even if they start with `-`!)
///
/// See: `getopt(3)`.
const END_OF_OPTIONS: &str = "--";

/// `argv[0]` is the program name and is never scanned.
const FIRST_ARG: usize = 1;

/// Offset of the first option character in an element (after the `-`).
const FIRST_OPT_CHAR: usize = 1;

/// Position of the scanner within the argument vector.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct Cursor {
    index: usize,
    offset: usize,
}

/// How far the cursor moves once an option has been decoded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Move {
    /// Stay in the current cluster.
    NextChar,
    /// Leave the current element and skip this many elements in total.
    Skip(usize),
}

impl Cursor {
    fn new() -> Self {
        Cursor {
            index: FIRST_ARG,
            offset: FIRST_OPT_CHAR,
        }
    }

    /// Index of the current argument vector element (`getopt(3)`'s `optind`).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte offset of the next option character within the current element.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn apply(&mut self, movement: Move) {
        match movement {
            Move::NextChar => self.offset += 1,
            Move::Skip(elements) => {
                self.index += elements;
                self.offset = FIRST_OPT_CHAR;
            }
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::new()
    }
}

/// Whether the scanner can still produce options.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Status {
    /// More options may follow.
    Active,
    /// A `--` or a positional argument ended option scanning.
    Done,
    /// Scanning stopped on an error. No more options will be produced.
    Failed(Error),
}

impl Default for Status {
    fn default() -> Self {
        Status::Active
    }
}

/// The result of a single [Scanner::step()].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Step {
    /// The next option.
    Option(ParsedOption),
    /// Scanning failed. This is only returned once.
    Error(Error),
    /// There are no more options.
    Exhausted,
}

/// A `getopt(3)`-like short option scanner.
///
/// The scanner walks the argument vector from left to right. It can be driven
/// with the [advance()](Scanner::advance) / [decode()](Scanner::decode) pair,
/// with [step()](Scanner::step), or used as an [Iterator].
///
/// Once a `--`, a positional argument or an error has been found the scanner
/// will not produce any further options. The arguments that were not
/// consumed are available from [remaining()](Scanner::remaining).
#[derive(Clone, Debug)]
pub struct Scanner<'a, S: Clone = String> {
    argv: Cow<'a, [S]>,
    grammar: Grammar,
    cursor: Cursor,
    status: Status,
    program_name: String,
}

impl Scanner<'static, String> {
    /// Create a scanner for the arguments of the current process.
    pub fn from_env(optstring: &str) -> Result<Self> {
        let argv: Vec<String> = env::args().collect();

        Scanner::with_argv(optstring, Cow::Owned(argv))
    }
}

impl<'a, S> Scanner<'a, S>
where
    S: AsRef<str> + Clone,
{
    /// Create a scanner for `argv`, which must include the program name
    /// as its first element.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidGrammar] if the optstring is not valid.
    pub fn new(optstring: &str, argv: &'a [S]) -> Result<Self> {
        Scanner::with_argv(optstring, Cow::Borrowed(argv))
    }

    fn with_argv(optstring: &str, argv: Cow<'a, [S]>) -> Result<Self> {
        let grammar = Grammar::new(optstring)?;

        let program_name = argv
            .first()
            .map(|arg0| base_name(arg0.as_ref()))
            .unwrap_or_default();

        Ok(Scanner {
            argv,
            grammar,
            cursor: Cursor::new(),
            status: Status::Active,
            program_name,
        })
    }

    /// Determine whether there is another option to decode, without
    /// consuming it.
    ///
    /// A `--` element is consumed and ends scanning. Any element that
    /// does not start with a dash followed by an option character ends
    /// scanning and is left for [remaining()](Scanner::remaining).
    pub fn advance(&mut self) -> bool {
        if self.status != Status::Active {
            return false;
        }

        let (end_of_options, is_option) = match self.argv.get(self.cursor.index) {
            Some(arg) => {
                let arg = arg.as_ref();
                (arg == END_OF_OPTIONS, looks_like_option(arg))
            }
            None => return false,
        };

        if end_of_options {
            self.cursor.apply(Move::Skip(1));
            self.finish(END_OF_OPTIONS);
            return false;
        }

        if !is_option {
            self.finish("positional argument");
            return false;
        }

        true
    }

    /// Consume the next option.
    ///
    /// Should only be called after [advance()](Scanner::advance) has
    /// returned `true`.
    ///
    /// # Errors
    ///
    /// - [Error::InvalidOption] and [Error::MissingArgument] stop the scanner
    ///   permanently.
    /// - [Error::NoOption] is returned if there is no option to decode.
    pub fn decode(&mut self) -> Result<ParsedOption> {
        match self.resolve() {
            Ok((parsed, movement)) => {
                tracing::trace!(
                    option = %parsed.option,
                    value = ?parsed.value,
                    index = self.cursor.index,
                    "decoded option"
                );

                self.cursor.apply(movement);

                Ok(parsed)
            }
            Err(err) => {
                if err.is_terminal() {
                    self.fail(err.clone());
                }

                Err(err)
            }
        }
    }

    /// Advance and decode in one go.
    pub fn step(&mut self) -> Step {
        if !self.advance() {
            return Step::Exhausted;
        }

        match self.decode() {
            Ok(parsed) => Step::Option(parsed),
            Err(err) => Step::Error(err),
        }
    }

    /// The arguments that have not been consumed (empty if there are none).
    ///
    /// After a failure this includes the element containing the offending
    /// option.
    pub fn remaining(&self) -> &[S] {
        self.argv.get(self.cursor.index..).unwrap_or(&[])
    }

    /// The final path component of `argv[0]`.
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// The compiled optstring.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Current position in the argument vector.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Index of the next unprocessed element (`getopt(3)`'s `optind`).
    pub fn index(&self) -> usize {
        self.cursor.index
    }

    /// The scanner status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Work out what the option at the cursor is and how far to move,
    /// without changing any state.
    fn resolve(&self) -> Result<(ParsedOption, Move)> {
        if self.status != Status::Active {
            return Err(Error::NoOption);
        }

        let arg = self
            .argv
            .get(self.cursor.index)
            .map(|arg| arg.as_ref())
            .filter(|arg| looks_like_option(arg))
            .ok_or(Error::NoOption)?;

        let option = arg
            .get(self.cursor.offset..)
            .and_then(|s| s.chars().next())
            .ok_or(Error::NoOption)?;

        let spec = self
            .grammar
            .lookup(option)
            .ok_or(Error::InvalidOption(option))?;

        let rest = &arg[self.cursor.offset + option.len_utf8()..];

        let needs = self.grammar.effective_need(spec);

        if needs == Need::Nothing {
            let movement = if rest.is_empty() {
                Move::Skip(1)
            } else {
                Move::NextChar
            };

            return Ok((ParsedOption::new(option), movement));
        }

        // The rest of the element is the argument, whatever it looks like.
        if !rest.is_empty() {
            return Ok((ParsedOption::with_value(option, rest), Move::Skip(1)));
        }

        let next = self.argv.get(self.cursor.index + 1).map(|arg| arg.as_ref());

        match next {
            Some(value) if needs == Need::Argument => {
                Ok((ParsedOption::with_value(option, value), Move::Skip(2)))
            }
            Some(value) if !value.is_empty() && !value.starts_with(OPT_PREFIX) => {
                Ok((ParsedOption::with_value(option, value), Move::Skip(2)))
            }
            Some(_) => {
                tracing::trace!(option = %option, "optional argument not taken from next element");

                Ok((ParsedOption::new(option), Move::Skip(1)))
            }
            None if needs == Need::Argument => Err(Error::MissingArgument(option)),
            None => Ok((ParsedOption::new(option), Move::Skip(1))),
        }
    }

    fn finish(&mut self, reason: &str) {
        tracing::debug!(index = self.cursor.index, reason, "end of options");

        self.status = Status::Done;
    }

    fn fail(&mut self, err: Error) {
        tracing::debug!(index = self.cursor.index, error = %err, "option scanning failed");

        self.status = Status::Failed(err);
    }
}

impl<'a, S> Iterator for Scanner<'a, S>
where
    S: AsRef<str> + Clone,
{
    type Item = Result<ParsedOption>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Step::Option(parsed) => Some(Ok(parsed)),
            Step::Error(err) => Some(Err(err)),
            Step::Exhausted => None,
        }
    }
}

impl<'a, S> FusedIterator for Scanner<'a, S> where S: AsRef<str> + Clone {}

/// An element holds options if it is a dash followed by an option character.
fn looks_like_option(arg: &str) -> bool {
    let mut chars = arg.chars();

    chars.next() == Some(OPT_PREFIX) && chars.next().map_or(false, is_option_char)
}

fn base_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or(path)
        .to_string()
}
