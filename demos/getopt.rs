// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// Scan the command-line of this program and show what was found.
///
/// ```bash
/// $ cargo run --example getopt -- -ba42 -v -z -- -w arg1 arg2
/// $ RUST_LOG=shortopt=trace cargo run --example getopt -- -vz opt -a
/// ```
use shortopt::{Result, Scanner, Status};
use tracing_subscriber::EnvFilter;

// -a requires an argument, -b and -v are flags, -z may have an argument.
const OPTSTRING: &str = "a:bz::v";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut scanner = Scanner::from_env(OPTSTRING)?;

    while let Some(result) = scanner.next() {
        match result {
            Ok(opt) if opt.has_arg() => println!(
                "{}: got option {:?} with arg {:?}",
                scanner.program_name(),
                opt.option,
                opt.arg_or_empty()
            ),
            Ok(opt) => println!("{}: got option {:?}", scanner.program_name(), opt.option),
            Err(err) => println!("{}: error parsing option: {}", scanner.program_name(), err),
        }
    }

    if let Status::Failed(err) = scanner.status() {
        println!("{}: scanning stopped: {}", scanner.program_name(), err);
    }

    println!(
        "{}: remaining arguments: {:?}",
        scanner.program_name(),
        scanner.remaining()
    );

    Ok(())
}
