use std::path::PathBuf;

use mind_core::MindError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("unknown condition `{0}`")]
    UnknownCondition(String),

    #[error("empty condition name")]
    EmptyCondition,

    #[error(transparent)]
    Mind(#[from] MindError),

    #[error("failed to read domain file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse domain: {0}")]
    Parse(#[from] serde_yaml::Error),
}
