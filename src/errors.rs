//! Error handling types based on `failure` crate.

use failure::Fail;
use itertools::Itertools;
use log::log;
use std::env;

/// Result type used by the command line tool.
pub type Result<T> = std::result::Result<T, failure::Error>;
pub use failure::Error;

/// A raw tag that does not encode any state of an ordering category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Fail)]
#[fail(display = "{} is not a valid {} tag", value, category)]
pub struct InvalidOrderingTag {
    /// Name of the ordering type the tag was meant for.
    pub category: &'static str,
    /// The rejected tag.
    pub value: i8,
}

/// A C++ standard library name that is not known.
#[derive(Debug, Clone, PartialEq, Eq, Fail)]
#[fail(
    display = "unknown C++ standard library: \"{}\" (expected libc++, libstdc++ or msstl)",
    name
)]
pub struct UnknownStdLib {
    /// The rejected name.
    pub name: String,
}

/// Unwraps a result, logging the error chain and exiting the process on error.
pub trait FancyUnwrap {
    /// Value type of the successful result.
    type Output;
    /// Returns the value or terminates the process.
    fn fancy_unwrap(self) -> Self::Output;
}

/// Logs `err` with all its causes at `log_level`.
pub fn print_trace(err: &failure::Error, log_level: log::Level) {
    log!(log_level, "Error:");
    for cause in err.iter_chain() {
        log!(log_level, "   {}", cause);
    }
    let backtrace = err.backtrace().to_string();
    if !backtrace.is_empty() && env::var("RUST_BACKTRACE").is_ok() {
        let lines = backtrace
            .split('\n')
            .take_while(|line| !line.contains("std::rt::lang_start::"))
            .join("\n");
        log!(log_level, "{}", lines);
    }
}

impl<T> FancyUnwrap for Result<T> {
    type Output = T;

    fn fancy_unwrap(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                print_trace(&err, log::Level::Error);
                std::process::exit(1);
            }
        }
    }
}
