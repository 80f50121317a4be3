//! Buffer-driven triangle with per-vertex colours.
//!
//! Positions are expected in clip space already; the vertex stage adds no
//! transform of its own.

use crate::interface::{EntryPoints, VertexAttribute, VertexBufferLayout, VertexFormat};
use bytemuck::{Pod, Zeroable};
use core::mem::{offset_of, size_of};
use spirv_std::{
    glam::{Vec3, Vec4},
    spirv,
};

pub const ENTRY_POINTS: EntryPoints = EntryPoints {
    vertex: "colored::vs_main",
    fragment: "colored::fs_main",
};

/// One vertex as it sits in the vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct VertexInput {
    pub position: [f32; 3],
    /// Linear RGB, each channel conventionally in [0, 1].
    pub color: [f32; 3],
}

impl VertexInput {
    pub const LAYOUT: VertexBufferLayout = VertexBufferLayout {
        array_stride: size_of::<VertexInput>() as u64,
        attributes: &[
            VertexAttribute {
                format: VertexFormat::Float32x3,
                offset: offset_of!(VertexInput, position) as u64,
                location: 0,
            },
            VertexAttribute {
                format: VertexFormat::Float32x3,
                offset: offset_of!(VertexInput, color) as u64,
                location: 1,
            },
        ],
    };

    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// Red, green and blue corners, counter-clockwise.
pub const TRIANGLE: [VertexInput; 3] = [
    VertexInput::new([0.0, 0.5, 0.0], [1.0, 0.0, 0.0]),
    VertexInput::new([-0.5, -0.5, 0.0], [0.0, 1.0, 0.0]),
    VertexInput::new([0.5, -0.5, 0.0], [0.0, 0.0, 1.0]),
];

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VertexOutput {
    pub clip_position: Vec4,
    pub color: Vec3,
}

pub fn vertex(input: &VertexInput) -> VertexOutput {
    VertexOutput {
        clip_position: Vec3::from(input.position).extend(1.0),
        color: Vec3::from(input.color),
    }
}

/// Opaque output of the interpolated colour.
pub fn fragment(color: Vec3) -> Vec4 {
    color.extend(1.0)
}

#[spirv(vertex)]
pub fn vs_main(
    position: Vec3,
    color: Vec3,
    #[spirv(position)] clip_position: &mut Vec4,
    out_color: &mut Vec3,
) {
    let output = vertex(&VertexInput {
        position: position.to_array(),
        color: color.to_array(),
    });
    *clip_position = output.clip_position;
    *out_color = output.color;
}

#[spirv(fragment)]
pub fn fs_main(color: Vec3, out: &mut Vec4) {
    *out = fragment(color);
}
