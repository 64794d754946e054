// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! `getopt(3)`-style scanning of short command-line options.
//!
//! The accepted options are described by a compact "optstring", exactly as
//! for the C `getopt()` function. The [Scanner] then walks the argument
//! vector from left to right, returning one option at a time, and leaves
//! the positional arguments that follow the options for the caller.
//!
//! If you want lots of extra features (long options, subcommands, generated
//! help), you should consider the excellent
//! [`clap`](https://crates.io/crates/clap) crate instead.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Quickstart](#quickstart)
//! * [The optstring](#the-optstring)
//! * [Scanning rules](#scanning-rules)
//! * [Errors](#errors)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Quickstart
//!
//! ```rust
//! use shortopt::{Result, Scanner};
//!
//! fn main() -> Result<()> {
//!     // -a requires an argument, -b and -v are flags,
//!     // -z may have an argument.
//!     let argv = ["prog", "-ba42", "-v", "-z", "--", "-w", "arg1"];
//!
//!     let mut scanner = Scanner::new("a:bz::v", &argv)?;
//!
//!     while scanner.advance() {
//!         let opt = scanner.decode()?;
//!
//!         match opt.arg() {
//!             Some(value) => println!("{}: option {:?} with {:?}", scanner.program_name(), opt.option, value),
//!             None => println!("{}: option {:?}", scanner.program_name(), opt.option),
//!         }
//!     }
//!
//!     assert_eq!(scanner.remaining(), &["-w", "arg1"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! The scanner is also an [Iterator], which yields a final `Err` if
//! scanning fails:
//!
//! ```rust
//! use shortopt::{ParsedOption, Scanner};
//!
//! let argv = ["prog", "-n", "3", "file.txt"];
//! let mut scanner = Scanner::new("n:q", &argv).unwrap();
//!
//! let options: Vec<ParsedOption> = scanner.by_ref().collect::<Result<_, _>>().unwrap();
//!
//! assert_eq!(options.len(), 1);
//! assert_eq!(options[0].to_u32(), Ok(3));
//! assert_eq!(scanner.remaining(), &["file.txt"]);
//! ```
//!
//! To scan the arguments of the running program, use [Scanner::from_env()].
//!
//! # The optstring
//!
//! - Each ASCII letter or digit declares an option.
//! - `a:` declares an option that requires an argument.
//! - `a::` declares an option that may have an argument.
//! - A leading `:` makes _all_ option arguments optional: a missing
//!   argument is then never an error.
//!
//! Any other character in the optstring is rejected with
//! [Error::InvalidGrammar].
//!
//! > **Note:** If a character is declared more than once, the _first_
//! > declaration is used: with `"aa:"`, `-a` is a flag.
//!
//! # Scanning rules
//!
//! - `argv[0]` is the program name and is never scanned.
//! - Options can be clustered: `-abc` is `-a -b -c`.
//! - The rest of an element following an option that takes an argument
//!   is always its argument: with `"a:b"`, `-ab` is option `a` with the
//!   argument `b`.
//! - Otherwise, a required argument is the whole of the next element,
//!   even if it starts with a dash: with `"a:b"`, `-a -b` is option `a`
//!   with the argument `-b`.
//! - An optional argument only takes the next element if that element
//!   is not empty and does not start with a dash.
//! - An empty argument is treated as no argument at all.
//! - Scanning stops at `--` (which is consumed), at a lone `-`, or at the
//!   first element that does not start with a dash followed by a letter or
//!   digit. Options are not permuted: anything after that point is returned
//!   by [Scanner::remaining()].
//!
//! ```rust
//! use shortopt::{ParsedOption, Scanner};
//!
//! let argv = ["prog", "-a", "-bc42"];
//! let options: Vec<ParsedOption> = Scanner::new("a::bc:", &argv)
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(
//!     options,
//!     vec![
//!         ParsedOption::new('a'),
//!         ParsedOption::new('b'),
//!         ParsedOption::with_value('c', "42"),
//!     ]
//! );
//! ```
//!
//! # Errors
//!
//! An unknown option ([Error::InvalidOption]) or a missing required
//! argument ([Error::MissingArgument]) is returned once and then stops the
//! scanner for good: no further options are returned even if later
//! arguments are valid. [Scanner::status()] records the failure and the
//! offending element is still part of [Scanner::remaining()].
//!
//! ```rust
//! use shortopt::{Error, Scanner, Status};
//!
//! let argv = ["prog", "-bc", "-z", "-b"];
//! let mut scanner = Scanner::new("bc", &argv).unwrap();
//!
//! let results: Vec<_> = scanner.by_ref().collect();
//!
//! assert_eq!(results.len(), 3);
//! assert_eq!(results[2], Err(Error::InvalidOption('z')));
//! assert_eq!(scanner.status(), &Status::Failed(Error::InvalidOption('z')));
//! assert_eq!(scanner.remaining(), &["-z", "-b"]);
//! ```
//!
//! # Limitations
//!
//! - Long options (`--verbose`) are not supported.
//! - Non-option arguments are not permuted.
//! - Option names can only be ASCII letters and digits.
//! - Argument values are always strings. The caller can convert them into
//!   numerics, _etc_ using the [ParsedOption] accessors.
//!
//! # Logging
//!
//! The crate logs through [`tracing`](https://crates.io/crates/tracing) at
//! `debug` and `trace` level. Install a subscriber to see the output.

mod error;
mod grammar;
mod option;
mod scanner;

pub use error::{Error, Result};

pub use grammar::{Grammar, Need, OptionSpec};

pub use option::ParsedOption;

pub use scanner::{Cursor, Scanner, Status, Step};
