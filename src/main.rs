//! Prints the binary layout of the ordering types as compiled for this target.

use clap::Parser;
use flexi_logger::{LevelFilter, LogSpecification, Logger};
use itertools::Itertools;
use log::{debug, info};
use qt_compare::errors::{FancyUnwrap, Result};
use qt_compare::native::{
    option_ordering_matches, NATIVE_NONE_TAG, ORDERING_IS_BIT_COMPATIBLE,
    OPTION_ORDERING_IS_BIT_COMPATIBLE,
};
use qt_compare::tag::LegacyUncomparable;
use qt_compare::{
    LegacyPartialOrdering, OrderingCategory, PartialOrdering, StdLib, StrongOrdering, WeakOrdering,
};
use serde_derive::Serialize;
use std::mem;

#[derive(Debug, Parser)]
/// Reports the representation of the qt_compare ordering types and their
/// compatibility with the C++ standard library and `std::cmp::Ordering`.
struct Options {
    #[arg(short, long, value_parser = parse_stdlib)]
    /// C++ standard library to check against (libc++, libstdc++ or msstl).
    /// Defaults to the one selected at build time.
    stdlib: Option<StdLib>,
    #[arg(long)]
    /// Print the report as JSON
    json: bool,
    #[arg(short, long)]
    /// Enable debug output
    verbose: bool,
}

fn parse_stdlib(value: &str) -> std::result::Result<StdLib, String> {
    value.parse().map_err(|err| format!("{}", err))
}

#[derive(Debug, Serialize)]
struct ConstantReport {
    name: String,
    tag: i8,
}

#[derive(Debug, Serialize)]
struct TypeReport {
    name: &'static str,
    size: usize,
    has_unordered: bool,
    constants: Vec<ConstantReport>,
}

#[derive(Debug, Serialize)]
struct AbiReport {
    stdlib: StdLib,
    unordered_tag: i8,
    matches_build: bool,
    option_ordering_is_bit_compatible: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    build_stdlib: StdLib,
    legacy_unordered_tag: i8,
    native_none_tag: i8,
    ordering_is_bit_compatible: bool,
    option_ordering_is_bit_compatible: bool,
    types: Vec<TypeReport>,
    abi: AbiReport,
}

fn type_report<O: OrderingCategory>(constants: &[O]) -> TypeReport {
    TypeReport {
        name: O::NAME,
        size: mem::size_of::<O>(),
        has_unordered: O::HAS_UNORDERED,
        constants: constants
            .iter()
            .map(|c| ConstantReport {
                name: format!("{:?}", c),
                tag: c.to_raw(),
            })
            .collect(),
    }
}

fn build_report(stdlib: StdLib) -> Report {
    Report {
        build_stdlib: StdLib::CURRENT,
        legacy_unordered_tag: LegacyUncomparable::UNORDERED,
        native_none_tag: NATIVE_NONE_TAG,
        ordering_is_bit_compatible: ORDERING_IS_BIT_COMPATIBLE,
        option_ordering_is_bit_compatible: OPTION_ORDERING_IS_BIT_COMPATIBLE,
        types: vec![
            type_report(&[
                StrongOrdering::LESS,
                StrongOrdering::EQUAL,
                StrongOrdering::GREATER,
            ]),
            type_report(&[
                WeakOrdering::LESS,
                WeakOrdering::EQUIVALENT,
                WeakOrdering::GREATER,
            ]),
            type_report(&[
                PartialOrdering::LESS,
                PartialOrdering::EQUIVALENT,
                PartialOrdering::GREATER,
                PartialOrdering::UNORDERED,
            ]),
            type_report(&[
                LegacyPartialOrdering::LESS,
                LegacyPartialOrdering::EQUIVALENT,
                LegacyPartialOrdering::GREATER,
                LegacyPartialOrdering::UNORDERED,
            ]),
        ],
        abi: AbiReport {
            stdlib,
            unordered_tag: stdlib.unordered_tag(),
            matches_build: stdlib == StdLib::CURRENT,
            option_ordering_is_bit_compatible: option_ordering_matches(stdlib.unordered_tag()),
        },
    }
}

fn print_text(report: &Report) {
    info!("Built for: {}", report.build_stdlib);
    for t in &report.types {
        info!(
            "{} ({} byte{}): {}",
            t.name,
            t.size,
            if t.size == 1 { "" } else { "s" },
            t.constants
                .iter()
                .map(|c| format!("{} = {}", c.name, c.tag))
                .join(", ")
        );
    }
    info!("LegacyPartialOrdering unordered tag: {}", report.legacy_unordered_tag);
    info!("None::<Ordering> tag: {}", report.native_none_tag);
    info!(
        "Ordering <-> StrongOrdering/WeakOrdering is a reinterpretation: {}",
        report.ordering_is_bit_compatible
    );
    info!(
        "Option<Ordering> <-> PartialOrdering is a reinterpretation: {}",
        report.option_ordering_is_bit_compatible
    );
    info!(
        "{}: unordered tag {}, same as build: {}, matches Option<Ordering>: {}",
        report.abi.stdlib,
        report.abi.unordered_tag,
        report.abi.matches_build,
        report.abi.option_ordering_is_bit_compatible
    );
}

fn run(options: Options) -> Result<()> {
    let level = if options.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _logger = Logger::with(LogSpecification::default(level).build())
        .start()
        .unwrap_or_else(|e| panic!("Logger initialization failed: {}", e));

    let stdlib = options.stdlib.unwrap_or(StdLib::CURRENT);
    debug!("checking against {:?}", stdlib);
    let report = build_report(stdlib);
    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }
    Ok(())
}

fn main() {
    run(Options::parse()).fancy_unwrap();
}
