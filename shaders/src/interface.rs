//! What a host has to agree on with the shaders: entry point names, the colour
//! target slot and the vertex buffer layout.

/// Every pipeline writes to exactly one RGBA colour target, in this slot.
pub const COLOR_TARGET_INDEX: u32 = 0;

/// Names a host passes when building a pipeline from the compiled module.
///
/// rust-gpu names an entry point by its module path, so both variants keep
/// their `vs_main` / `fs_main` functions and are told apart by the prefix.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EntryPoints {
    pub vertex: &'static str,
    pub fragment: &'static str,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VertexFormat {
    /// `vec3<f32>`
    Float32x3,
}

impl VertexFormat {
    pub const fn size(self) -> u64 {
        match self {
            VertexFormat::Float32x3 => 12,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    pub format: VertexFormat,
    /// Byte offset from the start of the vertex.
    pub offset: u64,
    pub location: u32,
}

/// Per-vertex layout of a single vertex buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VertexBufferLayout {
    /// How wide a vertex is in bytes.
    pub array_stride: u64,
    pub attributes: &'static [VertexAttribute],
}

impl VertexBufferLayout {
    /// A layout is usable when every attribute fits inside the stride.
    pub fn is_well_formed(&self) -> bool {
        self.attributes
            .iter()
            .all(|a| a.offset + a.format.size() <= self.array_stride)
    }
}
