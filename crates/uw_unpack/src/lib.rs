//! Unpacks a bundled script into one CommonJS file per module.
//!
//! - `detect`: finds the `!function (...) {...}([function..., ...])` wrapper,
//!   its utility block and entry module
//! - `module`: rewrites a module body into a standalone script
//!   (`n(3)` → `require('./module3')`, `e`/`t`/`n` → `module`/`exports`/`utils`)
//! - `loader`: builds the `index.js` that replaces the bundle runtime
//! - `unpack`: ties the above together and validates the result

pub mod detect;
pub mod emit;
pub mod error;
pub mod loader;
pub mod module;
pub mod output;
pub mod params;
mod scope;
pub mod unpack;

#[cfg(test)]
mod test_util;

pub use detect::{detect, BundleMatch, UtilityBlock};
pub use emit::print_script;
pub use error::{NoMatch, UnpackError};
pub use module::{BundledModule, TransformedModule};
pub use output::{render_bundle, write_bundle, RenderedFile};
pub use params::ParamBindings;
pub use unpack::{unpack, UnpackOutcome, UnpackedBundle};
