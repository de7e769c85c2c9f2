use std::path::PathBuf;

/// Why a tree was left alone. Every shape assumption of the detector that
/// fails lands here instead of aborting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NoMatch {
    #[error("no bundle wrapper found")]
    NoWrapper,
    #[error("bundle wrapper has no utility block")]
    NoUtilityBlock,
    #[error("utility block assigns no functions")]
    NoUtilityAssignments,
    #[error("first utility assignment does not target `<name>.<property>`")]
    UtilsNameNotMember,
    #[error("entry module id is not a numeric literal")]
    EntryNotNumeric,
    #[error("entry module id {0} is not a valid module index")]
    EntryNotIndex(f64),
}

/// Failures after a bundle has been matched. These abort the run.
#[derive(Debug, thiserror::Error)]
pub enum UnpackError {
    #[error("module {module} requires module {target}, which is not in the bundle")]
    DanglingRequire { module: usize, target: f64 },
    #[error("entry module {0} is not in the bundle")]
    EntryNotEmitted(usize),
    #[error("failed to generate code for {file}")]
    Emit {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
