use std::path::PathBuf;

/// Fatal errors. An unrecognized descriptor is not one of them: it simply
/// resolves to [`Rank::Invalid`](crate::models::Rank::Invalid).
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("cannot read input table {}: {source}", path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot write output table {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dictionary pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
