use thiserror::Error;

/// Rejections raised while reading an instance or converting its weights.
///
/// Edge indices are 1-based positions in the input edge list.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("invalid {what}: {token:?}")]
    InvalidToken { what: &'static str, token: String },

    #[error("{role} vertex {vertex} out of range for {vertex_count} vertices")]
    QueryVertexOutOfRange {
        role: &'static str,
        vertex: u64,
        vertex_count: usize,
    },

    #[error("edge {edge}: endpoint {vertex} out of range for {vertex_count} vertices")]
    EdgeEndpointOutOfRange {
        edge: usize,
        vertex: u64,
        vertex_count: usize,
    },

    #[error("edge {edge}: weight {weight} must be finite and non-negative")]
    InvalidWeight { edge: usize, weight: f64 },

    #[error("edge {edge}: weight {weight} is not an integer")]
    NonIntegralWeight { edge: usize, weight: f64 },

    #[error("edge {edge}: weight {weight} exceeds the bucket span limit {limit}")]
    WeightSpanTooLarge { edge: usize, weight: f64, limit: u64 },

    #[error("vertex count {0} exceeds the supported maximum")]
    TooManyVertices(u64),

    #[error("unexpected trailing input: {token:?}")]
    TrailingInput { token: String },
}
