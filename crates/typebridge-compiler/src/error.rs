use std::path::PathBuf;

/// Fatal errors of a generation run.
///
/// Unknown type shapes are never errors: the translator degrades them to a
/// default type and carries on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid metadata in `{label}`: {source}")]
    Json {
        label: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to parse `{label}`: {source}")]
    Script {
        label: String,
        #[source]
        source: typebridge_script::Error,
    },

    #[error("seed type `{0}` is not in the model")]
    UnknownSeed(String),

    #[error("type #{index} of `{assembly}` has no name")]
    InvalidType { assembly: String, index: usize },

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
