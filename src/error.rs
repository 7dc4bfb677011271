// Typed errors for the analysis core.
//
// Every core operation fails fast with one of these and hands it back to the
// caller untouched. Only the binary converts them into `anyhow` for reporting.
// Fetch errors keep the fetcher's error chain as their source.

/// Everything that can go wrong between fetching a page and scoring it.
#[derive(thiserror::Error, Debug)]
pub enum AnalysisError {
    /// The fetch collaborator failed for this source.
    #[error("failed to fetch {source_id}")]
    Fetch {
        source_id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The collaborator succeeded but returned no usable text.
    #[error("page body for {source_id} is empty")]
    EmptyBody { source_id: String },

    /// The tokenizer was handed empty or whitespace-only text.
    #[error("input text cannot be empty")]
    EmptyInput,

    /// Text was present but contained no word of three or more letters.
    #[error("no tokens found in the input text")]
    NoTokensFound,

    /// A statistics function received a degenerate count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Cosine similarity needs vectors of equal length.
    #[error("vectors must be the same length (got {left} and {right})")]
    LengthMismatch { left: usize, right: usize },

    /// Cosine similarity is undefined for a zero vector.
    #[error("one or both vectors have zero magnitude")]
    ZeroMagnitude,
}

pub type Result<T> = core::result::Result<T, AnalysisError>;
