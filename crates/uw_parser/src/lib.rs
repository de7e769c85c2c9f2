//! JavaScript parser front end for unwebpack.
//!
//! Wraps the standard SWC parser. Bundles are parsed with the script goal,
//! since the bundler output is a classic script and not an ES module.

pub mod parse;

pub use parse::{parse_bundle, ParseResult};
