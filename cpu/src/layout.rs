//! Raw vertex buffers and how vertices are pulled out of them.

use crate::error::DrawError;
use triangle_shaders::colored::VertexInput;
use triangle_shaders::interface::VertexBufferLayout;

/// A bound vertex buffer: raw bytes plus the layout the host declared for them.
#[derive(Copy, Clone, Debug)]
pub struct VertexBuffer<'a> {
    pub layout: VertexBufferLayout,
    pub bytes: &'a [u8],
}

impl<'a> VertexBuffer<'a> {
    pub fn new(layout: VertexBufferLayout, bytes: &'a [u8]) -> Self {
        Self { layout, bytes }
    }

    pub fn from_vertices(vertices: &'a [VertexInput]) -> Self {
        Self::new(VertexInput::LAYOUT, bytemuck::cast_slice(vertices))
    }

    /// Number of whole vertices in the buffer under its own layout.
    pub fn vertex_count(&self) -> Result<u32, DrawError> {
        let stride = self.layout.array_stride;
        if stride == 0 || !self.layout.is_well_formed() {
            return Err(DrawError::LayoutMismatch);
        }
        let len = self.bytes.len();
        if len as u64 % stride != 0 {
            return Err(DrawError::BufferLength { len, stride });
        }
        Ok((len as u64 / stride) as u32)
    }

    /// Reads every vertex, provided the buffer was declared with `expected`.
    ///
    /// The bytes need not be aligned.
    pub fn decode(&self, expected: &VertexBufferLayout) -> Result<Vec<VertexInput>, DrawError> {
        if self.layout != *expected {
            return Err(DrawError::LayoutMismatch);
        }
        self.vertex_count()?;
        Ok(self
            .bytes
            .chunks_exact(self.layout.array_stride as usize)
            .map(bytemuck::pod_read_unaligned::<VertexInput>)
            .collect())
    }
}
