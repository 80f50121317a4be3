//! The two shader programs, seen from the host side.

use crate::config::ColorWrites;
use crate::draw::Draw;
use crate::error::DrawError;
use triangle_shaders::colored::{self, VertexInput};
use triangle_shaders::flat;
use triangle_shaders::glam::{Vec3, Vec4};
use triangle_shaders::interface::EntryPoints;

/// Values handed from the vertex stage to the fragment stage.
pub trait Varying: Copy {
    /// Blends the three corner values of a triangle with barycentric `weights`.
    fn blend(corners: [Self; 3], weights: Vec3) -> Self;
}

impl Varying for () {
    fn blend(_corners: [(); 3], _weights: Vec3) {}
}

impl Varying for Vec3 {
    fn blend(corners: [Vec3; 3], weights: Vec3) -> Vec3 {
        corners[0] * weights.x + corners[1] * weights.y + corners[2] * weights.z
    }
}

/// A vertex stage and fragment stage pair plus the vertex pulling they expect.
pub trait Program {
    type Input: Copy;
    type Varying: Varying;

    fn entry_points(&self) -> EntryPoints;

    fn write_mask(&self) -> ColorWrites {
        ColorWrites::ALL
    }

    /// Checks `draw` against this program's input contract and produces one
    /// input per vertex invocation.
    fn pull_vertices(&self, draw: &Draw<'_>) -> Result<Vec<Self::Input>, DrawError>;

    /// Returns the clip position and the values to interpolate.
    fn vertex(&self, input: Self::Input) -> (Vec4, Self::Varying);

    fn fragment(&self, frag_coord: Vec4, varying: Self::Varying) -> Vec4;
}

#[derive(Copy, Clone, Debug, Default)]
pub struct FlatProgram;

impl Program for FlatProgram {
    type Input = u32;
    type Varying = ();

    fn entry_points(&self) -> EntryPoints {
        flat::ENTRY_POINTS
    }

    fn pull_vertices(&self, draw: &Draw<'_>) -> Result<Vec<u32>, DrawError> {
        Ok(draw.indices(flat::VERTEX_COUNT)?.collect())
    }

    fn vertex(&self, index: u32) -> (Vec4, ()) {
        (flat::vertex(index).clip_position, ())
    }

    fn fragment(&self, frag_coord: Vec4, _varying: ()) -> Vec4 {
        flat::fragment(&flat::VertexOutput {
            clip_position: frag_coord,
        })
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct ColoredProgram;

impl Program for ColoredProgram {
    type Input = VertexInput;
    type Varying = Vec3;

    fn entry_points(&self) -> EntryPoints {
        colored::ENTRY_POINTS
    }

    fn write_mask(&self) -> ColorWrites {
        ColorWrites::COLOR
    }

    fn pull_vertices(&self, draw: &Draw<'_>) -> Result<Vec<VertexInput>, DrawError> {
        draw.vertices(&VertexInput::LAYOUT)
    }

    fn vertex(&self, input: VertexInput) -> (Vec4, Vec3) {
        let output = colored::vertex(&input);
        (output.clip_position, output.color)
    }

    fn fragment(&self, _frag_coord: Vec4, color: Vec3) -> Vec4 {
        colored::fragment(color)
    }
}
