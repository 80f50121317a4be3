//! Edge-function triangle rasterizer.
//!
//! Samples at pixel centres. A centre exactly on an edge belongs to the
//! triangle only when that edge is a top or left edge, so triangles sharing an
//! edge never both shade it. Attributes are interpolated perspective-correctly
//! through 1/w.

use crate::config::{Face, FrontFace, RasterConfig};
use crate::program::Varying;
use triangle_shaders::glam::{vec2, vec3, vec4, Vec2, Vec3, Vec4};

/// Output of one vertex invocation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClipVertex<V> {
    pub clip_position: Vec4,
    pub varying: V,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Coverage {
    /// Facing away according to the cull mode.
    Culled,
    /// Zero area, a non-finite corner, or a corner at or behind the eye (w <= 0).
    Degenerate,
    /// Number of fragments shaded, possibly 0 when off-screen.
    Drawn(usize),
}

pub fn edge(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Whether the edge `a -> b` of a triangle with pixel-space signed `area` is a
/// top or left edge. Pixel y points down.
pub fn is_top_left(a: Vec2, b: Vec2, area: f32) -> bool {
    let d = if area > 0.0 { b - a } else { a - b };
    (d.y == 0.0 && d.x > 0.0) || d.y < 0.0
}

fn covers(weight: f32, top_left: bool) -> bool {
    weight > 0.0 || (weight == 0.0 && top_left)
}

/// Maps NDC to pixel space. NDC y points up, pixel y points down.
pub fn to_screen(ndc: Vec3, width: u32, height: u32) -> Vec3 {
    let x = (ndc.x + 1.0) * 0.5 * width as f32;
    let y = (1.0 - (ndc.y + 1.0) * 0.5) * height as f32;
    vec3(x, y, ndc.z)
}

/// Whether a triangle with the given NDC signed area is kept.
pub fn is_visible(ndc_area: f32, front_face: FrontFace, cull_mode: Option<Face>) -> bool {
    let front = match front_face {
        FrontFace::Ccw => ndc_area > 0.0,
        FrontFace::Cw => ndc_area < 0.0,
    };
    match cull_mode {
        Some(Face::Back) => front,
        Some(Face::Front) => !front,
        None => true,
    }
}

/// Rasterizes one triangle, calling `shade(x, y, frag_coord, varying)` once
/// per covered pixel.
pub fn rasterize<V, F>(tri: &[ClipVertex<V>; 3], config: &RasterConfig, mut shade: F) -> Coverage
where
    V: Varying,
    F: FnMut(u32, u32, Vec4, V),
{
    let tri = *tri;
    if tri.iter().any(|v| v.clip_position.w <= 0.0) {
        return Coverage::Degenerate;
    }
    let inv_w = tri.map(|v| 1.0 / v.clip_position.w);
    let ndc: [Vec3; 3] = [0, 1, 2].map(|i| tri[i].clip_position.truncate() * inv_w[i]);
    if ndc.iter().any(|p| !p.is_finite()) {
        return Coverage::Degenerate;
    }

    let ndc_area = edge(ndc[0].truncate(), ndc[1].truncate(), ndc[2].truncate());
    if ndc_area == 0.0 {
        return Coverage::Degenerate;
    }
    if !is_visible(ndc_area, config.front_face, config.cull_mode) {
        return Coverage::Culled;
    }

    let s = ndc.map(|p| to_screen(p, config.width, config.height));
    let (s0, s1, s2) = (s[0].truncate(), s[1].truncate(), s[2].truncate());
    let area = edge(s0, s1, s2);
    let inv_area = 1.0 / area;
    let top_left = [
        is_top_left(s1, s2, area),
        is_top_left(s2, s0, area),
        is_top_left(s0, s1, area),
    ];

    let max_px = config.width as f32 - 1.0;
    let max_py = config.height as f32 - 1.0;
    let min_x = s0.x.min(s1.x).min(s2.x).floor().max(0.0);
    let max_x = s0.x.max(s1.x).max(s2.x).ceil().min(max_px);
    let min_y = s0.y.min(s1.y).min(s2.y).floor().max(0.0);
    let max_y = s0.y.max(s1.y).max(s2.y).ceil().min(max_py);
    if min_x > max_x || min_y > max_y {
        return Coverage::Drawn(0);
    }

    let varyings = tri.map(|v| v.varying);
    let mut fragments = 0;
    for y in min_y as u32..=max_y as u32 {
        for x in min_x as u32..=max_x as u32 {
            let p = vec2(x as f32 + 0.5, y as f32 + 0.5);
            let w0 = edge(s1, s2, p) * inv_area;
            let w1 = edge(s2, s0, p) * inv_area;
            let w2 = edge(s0, s1, p) * inv_area;
            if !(covers(w0, top_left[0]) && covers(w1, top_left[1]) && covers(w2, top_left[2])) {
                continue;
            }

            let depth = s[0].z * w0 + s[1].z * w1 + s[2].z * w2;
            let persp = vec3(w0 * inv_w[0], w1 * inv_w[1], w2 * inv_w[2]);
            let frag_inv_w = persp.x + persp.y + persp.z;
            let weights = persp / frag_inv_w;

            shade(x, y, vec4(p.x, p.y, depth, frag_inv_w), V::blend(varyings, weights));
            fragments += 1;
        }
    }
    Coverage::Drawn(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner(x: f32, y: f32) -> ClipVertex<()> {
        ClipVertex {
            clip_position: vec4(x, y, 0.0, 1.0),
            varying: (),
        }
    }

    fn count(tri: &[ClipVertex<()>; 3], config: &RasterConfig) -> Coverage {
        rasterize(tri, config, |_, _, _, _| {})
    }

    #[test]
    fn ndc_corners_map_to_target_edges() {
        assert_eq!(to_screen(vec3(-1.0, 1.0, 0.0), 64, 32), vec3(0.0, 0.0, 0.0));
        assert_eq!(to_screen(vec3(1.0, -1.0, 0.5), 64, 32), vec3(64.0, 32.0, 0.5));
        assert_eq!(to_screen(Vec3::ZERO, 64, 32), vec3(32.0, 16.0, 0.0));
    }

    #[test]
    fn back_faces_are_culled() {
        let ccw = [corner(0.0, 0.5), corner(-0.5, -0.5), corner(0.5, -0.5)];
        let cw = [ccw[0], ccw[2], ccw[1]];
        let config = RasterConfig::default();

        assert_eq!(count(&ccw, &config), Coverage::Drawn(512));
        assert_eq!(count(&cw, &config), Coverage::Culled);

        let config = RasterConfig {
            cull_mode: None,
            ..RasterConfig::default()
        };
        assert_eq!(count(&cw, &config), Coverage::Drawn(512));

        let config = RasterConfig {
            front_face: FrontFace::Cw,
            ..RasterConfig::default()
        };
        assert_eq!(count(&ccw, &config), Coverage::Culled);
    }

    #[test]
    fn top_left_edges_follow_winding() {
        // clockwise on screen: top edge runs right, left edge runs up
        let (a, b, c) = (vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(0.0, 10.0));
        let area = edge(a, b, c);
        assert!(area > 0.0);
        assert!(is_top_left(a, b, area));
        assert!(is_top_left(c, a, area));
        assert!(!is_top_left(b, c, area));

        // same triangle wound the other way
        assert!(is_top_left(b, a, -area));
        assert!(is_top_left(a, c, -area));
        assert!(!is_top_left(c, b, -area));
    }

    #[test]
    fn shared_edge_is_shaded_once() {
        // the diagonal passes through 32 pixel centres
        let quad = [
            [corner(-0.5, -0.5), corner(0.5, -0.5), corner(0.5, 0.5)],
            [corner(-0.5, -0.5), corner(0.5, 0.5), corner(-0.5, 0.5)],
        ];
        for config in [
            RasterConfig::default(),
            RasterConfig {
                front_face: FrontFace::Cw,
                cull_mode: None,
                ..RasterConfig::default()
            },
        ] {
            let mut hits = vec![0u32; 64 * 64];
            let mut total = 0;
            for tri in &quad {
                match rasterize(tri, &config, |x, y, _, _| hits[(y * 64 + x) as usize] += 1) {
                    Coverage::Drawn(n) => total += n,
                    other => panic!("quad half not drawn: {other:?}"),
                }
            }
            assert_eq!(total, 1024);
            assert!(hits.iter().all(|h| *h <= 1));
            assert_eq!(hits.iter().filter(|h| **h == 1).count(), 1024);
        }
    }

    #[test]
    fn zero_area_is_degenerate() {
        let line = [corner(0.0, 0.0), corner(0.5, 0.5), corner(1.0, 1.0)];
        assert_eq!(count(&line, &RasterConfig::default()), Coverage::Degenerate);
    }

    #[test]
    fn non_positive_w_is_degenerate() {
        let mut tri = [corner(0.0, 0.5), corner(-0.5, -0.5), corner(0.5, -0.5)];
        tri[1].clip_position.w = 0.0;
        assert_eq!(count(&tri, &RasterConfig::default()), Coverage::Degenerate);
    }

    #[test]
    fn non_finite_corner_is_degenerate() {
        let tri = [corner(f32::NAN, 0.5), corner(-0.5, -0.5), corner(0.5, -0.5)];
        let config = RasterConfig {
            cull_mode: None,
            ..RasterConfig::default()
        };
        assert_eq!(count(&tri, &config), Coverage::Degenerate);

        let tri = [corner(0.0, f32::INFINITY), corner(-0.5, -0.5), corner(0.5, -0.5)];
        assert_eq!(count(&tri, &config), Coverage::Degenerate);
    }

    #[test]
    fn off_screen_triangle_draws_nothing() {
        let tri = [corner(3.0, 3.5), corner(2.5, 2.5), corner(3.5, 2.5)];
        assert_eq!(count(&tri, &RasterConfig::default()), Coverage::Drawn(0));
    }

    #[test]
    fn covering_triangle_is_clamped_to_target() {
        let tri = [corner(-3.0, -3.0), corner(3.0, -3.0), corner(0.0, 5.0)];
        let config = RasterConfig::default().with_size(8, 4);
        assert_eq!(count(&tri, &config), Coverage::Drawn(32));
    }

    #[test]
    fn weights_sum_to_one_with_uneven_w() {
        let tri = [
            ClipVertex {
                clip_position: vec4(0.0, 1.0, 0.0, 2.0),
                varying: Vec3::X,
            },
            ClipVertex {
                clip_position: vec4(-0.5, -0.5, 0.0, 1.0),
                varying: Vec3::Y,
            },
            ClipVertex {
                clip_position: vec4(0.5, -0.5, 0.0, 1.0),
                varying: Vec3::Z,
            },
        ];
        let mut shaded = 0;
        rasterize(&tri, &RasterConfig::default(), |_, _, _, color: Vec3| {
            assert!((color.x + color.y + color.z - 1.0).abs() < 1e-5);
            shaded += 1;
        });
        assert!(shaded > 0);
    }
}
