use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort an operation on a [`ShaderProgram`](crate::ShaderProgram).
///
/// Anything not listed here (stage limit, recompiling, link or validate
/// failures, use/unuse mismatches) is logged and skipped instead.
#[derive(Error, Debug)]
pub enum ShaderError {
    #[error("a shader program needs a vertex stage")]
    MissingVertexStage,

    #[error("the driver could not allocate a program handle")]
    ProgramAllocation,

    #[error("could not read shader source {path:?}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("shader source {path:?} is empty")]
    EmptySource { path: PathBuf },

    #[error("can't tell the shader stage of {path:?} from its extension")]
    UnknownStage { path: PathBuf },
}

pub type Result<T, E = ShaderError> = std::result::Result<T, E>;
