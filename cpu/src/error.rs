use thiserror::Error;

/// Contract violations between a draw and the pipeline it is issued against.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("draw expects {expected} vertices, got {actual}")]
    VertexCount { expected: u32, actual: u32 },
    #[error("pipeline derives vertices from their index, but a vertex buffer was bound")]
    UnexpectedVertexBuffer,
    #[error("pipeline reads a vertex buffer, but none was bound")]
    MissingVertexBuffer,
    #[error("bound vertex buffer layout does not match the pipeline's vertex input")]
    LayoutMismatch,
    #[error("vertex buffer of {len} bytes is not a whole number of {stride}-byte vertices")]
    BufferLength { len: usize, stride: u64 },
    #[error("render target of {width}x{height} has no pixels")]
    EmptyTarget { width: u32, height: u32 },
    #[error("no render target bound at colour slot {slot}")]
    MissingColorTarget { slot: u32 },
    #[error("render target is {actual:?}, pipeline is configured for {expected:?}")]
    TargetSize {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}
