//! ECMAScript AST for unwebpack.
//!
//! Re-exports the standard SWC AST and adds the small vocabulary shared by
//! the unpacker crates:
//! - Module parameter roles (`module`, `exports`, `require`)
//! - Output file naming
//! - Unpack options

pub use swc_ecma_ast::*;

use serde::{Deserialize, Serialize};

/// Name of the loader-replacement file every unpacked module imports its
/// utilities from.
pub const INDEX_FILE: &str = "index.js";

/// Relative specifier that unpacked files use to reach the loader replacement.
pub const INDEX_SPECIFIER: &str = "./index.js";

/// Relative require specifier for the module with the given id (`./module3`).
pub fn module_specifier(id: impl std::fmt::Display) -> String {
    format!("./module{id}")
}

/// File name written for the module with the given id (`module3.js`).
pub fn module_file_name(id: usize) -> String {
    format!("module{id}.js")
}

/// The positional parameters a bundled module function receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamRole {
    /// Slot 0, the module record.
    Module,
    /// Slot 1, the module's exports object.
    Exports,
    /// Slot 2, the bundle-internal require function.
    Require,
}

impl ParamRole {
    /// All roles in parameter order.
    pub const ALL: [ParamRole; 3] = [ParamRole::Module, ParamRole::Exports, ParamRole::Require];

    /// Zero-based parameter position of this role.
    pub fn slot(self) -> usize {
        match self {
            ParamRole::Module => 0,
            ParamRole::Exports => 1,
            ParamRole::Require => 2,
        }
    }

    /// Name the binding is renamed to in a standalone file.
    ///
    /// `require` does not map back to the global `require`: numeric-id
    /// requires are rewritten separately and any remaining use of the binding
    /// refers to the shared utility object.
    pub fn ambient_name(self) -> &'static str {
        match self {
            ParamRole::Module => "module",
            ParamRole::Exports => "exports",
            ParamRole::Require => "utils",
        }
    }
}

/// Options controlling how a detected bundle is unpacked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnpackOptions {
    /// Only rewrite identifiers that resolve to the module's own parameters.
    /// When false, any identifier with a matching name is rewritten.
    pub resolve_scopes: bool,
    /// Downgrade requires of ids that were not emitted from an error to a
    /// warning.
    pub allow_dangling: bool,
}

impl Default for UnpackOptions {
    fn default() -> Self {
        Self {
            resolve_scopes: true,
            allow_dangling: false,
        }
    }
}
