//! Index-driven triangle in a flat gray.
//!
//! No vertex buffer is bound: the three corners are derived from the vertex
//! index alone, so the host draws exactly [`VERTEX_COUNT`] vertices.

use crate::interface::EntryPoints;
use spirv_std::{
    glam::{vec2, vec4, Vec2, Vec4},
    spirv,
};

pub const VERTEX_COUNT: u32 = 3;

pub const GRAY: Vec4 = vec4(0.5, 0.5, 0.5, 1.0);

pub const ENTRY_POINTS: EntryPoints = EntryPoints {
    vertex: "flat::vs_main",
    fragment: "flat::fs_main",
};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VertexOutput {
    pub clip_position: Vec4,
}

/// Corner of the triangle for `index`.
///
/// Only 0, 1 and 2 are meaningful; they map to (0.5, -0.5), (0, 0.5) and
/// (-0.5, -0.5).
pub fn position_for_index(index: u32) -> Vec2 {
    let x = (1.0 - index as f32) * 0.5;
    let y = ((index & 1) as f32 * 2.0 - 1.0) * 0.5;
    vec2(x, y)
}

pub fn vertex(index: u32) -> VertexOutput {
    VertexOutput {
        clip_position: position_for_index(index).extend(0.0).extend(1.0),
    }
}

pub fn fragment(_input: &VertexOutput) -> Vec4 {
    GRAY
}

#[spirv(vertex)]
pub fn vs_main(
    #[spirv(vertex_index)] vertex_index: u32,
    #[spirv(position)] clip_position: &mut Vec4,
) {
    *clip_position = vertex(vertex_index).clip_position;
}

#[spirv(fragment)]
pub fn fs_main(#[spirv(frag_coord)] frag_coord: Vec4, out: &mut Vec4) {
    *out = fragment(&VertexOutput {
        clip_position: frag_coord,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_follow_index() {
        assert_eq!(position_for_index(0), vec2(0.5, -0.5));
        assert_eq!(position_for_index(1), vec2(0.0, 0.5));
        assert_eq!(position_for_index(2), vec2(-0.5, -0.5));
    }

    #[test]
    fn large_index_does_not_overflow() {
        for index in [(1 << 31) + 1, u32::MAX] {
            let p = position_for_index(index);
            assert!(p.x.is_finite());
            assert_eq!(p.y, 0.5);
        }
        assert_eq!(position_for_index(1 << 30).y, -0.5);
    }

    #[test]
    fn clip_position_has_unit_w() {
        let expected = [
            vec4(0.5, -0.5, 0.0, 1.0),
            vec4(0.0, 0.5, 0.0, 1.0),
            vec4(-0.5, -0.5, 0.0, 1.0),
        ];
        for (i, expected) in (0..VERTEX_COUNT).zip(expected) {
            assert_eq!(vertex(i).clip_position, expected);
        }
    }

    #[test]
    fn corners_are_distinct() {
        let p: [Vec2; 3] = [0, 1, 2].map(position_for_index);
        assert_ne!(p[0], p[1]);
        assert_ne!(p[1], p[2]);
        assert_ne!(p[0], p[2]);
    }

    #[test]
    fn fragment_ignores_input() {
        for clip_position in [
            Vec4::ZERO,
            vec4(12.5, 400.0, 0.3, 1.0),
            vec4(-1.0, f32::MAX, f32::NAN, 0.0),
        ] {
            assert_eq!(fragment(&VertexOutput { clip_position }), GRAY);
        }
        assert_eq!(GRAY, vec4(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn entry_points_match_stage_functions() {
        let mut clip_position = Vec4::ZERO;
        vs_main(1, &mut clip_position);
        assert_eq!(clip_position, vec4(0.0, 0.5, 0.0, 1.0));

        let mut out = Vec4::ZERO;
        fs_main(vec4(3.5, 7.5, 0.0, 1.0), &mut out);
        assert_eq!(out, GRAY);
    }
}
