use crate::error::DrawError;
use crate::layout::VertexBuffer;
use std::ops::Range;
use triangle_shaders::colored::VertexInput;
use triangle_shaders::flat;
use triangle_shaders::interface::VertexBufferLayout;

/// One non-instanced, non-indexed draw of a triangle list.
#[derive(Copy, Clone, Debug)]
pub struct Draw<'a> {
    pub vertex_count: u32,
    pub vertex_buffer: Option<VertexBuffer<'a>>,
}

impl<'a> Draw<'a> {
    /// The index-driven triangle: three vertices, nothing bound.
    pub fn flat() -> Self {
        Self {
            vertex_count: flat::VERTEX_COUNT,
            vertex_buffer: None,
        }
    }

    /// Draws every vertex in `vertices`.
    pub fn colored(vertices: &'a [VertexInput]) -> Self {
        Self {
            vertex_count: vertices.len() as u32,
            vertex_buffer: Some(VertexBuffer::from_vertices(vertices)),
        }
    }

    /// Vertex indices for a pipeline that derives everything from the index
    /// and is only defined for exactly `expected` vertices.
    pub fn indices(&self, expected: u32) -> Result<Range<u32>, DrawError> {
        if self.vertex_buffer.is_some() {
            return Err(DrawError::UnexpectedVertexBuffer);
        }
        if self.vertex_count != expected {
            return Err(DrawError::VertexCount {
                expected,
                actual: self.vertex_count,
            });
        }
        Ok(0..self.vertex_count)
    }

    /// Vertices of the bound buffer, which must use `layout` and hold exactly
    /// `vertex_count` of them.
    pub fn vertices(&self, layout: &VertexBufferLayout) -> Result<Vec<VertexInput>, DrawError> {
        let buffer = self.vertex_buffer.ok_or(DrawError::MissingVertexBuffer)?;
        let vertices = buffer.decode(layout)?;
        if vertices.len() as u32 != self.vertex_count {
            return Err(DrawError::VertexCount {
                expected: vertices.len() as u32,
                actual: self.vertex_count,
            });
        }
        Ok(vertices)
    }
}
