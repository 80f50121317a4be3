use crate::config::RasterConfig;
use crate::draw::Draw;
use crate::error::DrawError;
use crate::program::Program;
use crate::raster::{rasterize, ClipVertex, Coverage};
use crate::target::RenderTarget;
use triangle_shaders::interface::COLOR_TARGET_INDEX;

/// Counters for one draw.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Vertex stage invocations.
    pub vertices: u32,
    /// Complete triangles assembled from the vertex list.
    pub triangles: u32,
    pub culled: u32,
    /// Fragment stage invocations.
    pub fragments: usize,
}

/// A program bound to fixed-function raster state.
#[derive(Clone, Debug)]
pub struct Pipeline<P> {
    program: P,
    config: RasterConfig,
}

impl<P: Program> Pipeline<P> {
    pub fn new(program: P, config: RasterConfig) -> Self {
        Self { program, config }
    }

    pub fn program(&self) -> &P {
        &self.program
    }

    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// A target of the configured size, cleared to the clear colour.
    pub fn create_target(&self) -> Result<RenderTarget, DrawError> {
        let mut target = RenderTarget::new(self.config.width, self.config.height)?;
        target.clear(self.config.clear_color);
        Ok(target)
    }

    /// Clears a fresh target and issues `draw` into it.
    pub fn render(&self, draw: &Draw<'_>) -> Result<(RenderTarget, DrawStats), DrawError> {
        let mut target = self.create_target()?;
        let stats = self.draw(&mut target, draw)?;
        Ok((target, stats))
    }

    /// Issues `draw` into the colour target slot of a bound attachment list.
    pub fn draw_into(
        &self,
        attachments: &mut [RenderTarget],
        draw: &Draw<'_>,
    ) -> Result<DrawStats, DrawError> {
        let target = attachments
            .get_mut(COLOR_TARGET_INDEX as usize)
            .ok_or(DrawError::MissingColorTarget {
                slot: COLOR_TARGET_INDEX,
            })?;
        self.draw(target, draw)
    }

    /// Runs the vertex stage over every vertex of `draw`, then rasterizes each
    /// triangle of the list and runs the fragment stage per covered pixel.
    ///
    /// The target must have the configured size; the draw is validated before
    /// any stage runs, so a rejected draw leaves the target untouched.
    pub fn draw(&self, target: &mut RenderTarget, draw: &Draw<'_>) -> Result<DrawStats, DrawError> {
        if target.width() != self.config.width || target.height() != self.config.height {
            return Err(DrawError::TargetSize {
                expected: (self.config.width, self.config.height),
                actual: (target.width(), target.height()),
            });
        }
        let inputs = self.program.pull_vertices(draw)?;
        let entry = self.program.entry_points();
        log::debug!(
            "draw {} vertices with {} / {}",
            inputs.len(),
            entry.vertex,
            entry.fragment
        );

        let outputs: Vec<ClipVertex<P::Varying>> = inputs
            .into_iter()
            .enumerate()
            .map(|(i, input)| {
                let (clip_position, varying) = self.program.vertex(input);
                log::trace!("vertex {i}: clip position {clip_position}");
                ClipVertex {
                    clip_position,
                    varying,
                }
            })
            .collect();

        let mut stats = DrawStats {
            vertices: outputs.len() as u32,
            ..DrawStats::default()
        };
        let leftover = outputs.len() % 3;
        if leftover != 0 {
            log::warn!("ignoring {leftover} trailing vertices that do not form a triangle");
        }

        let mask = self.program.write_mask();
        for (t, tri) in outputs.chunks_exact(3).enumerate() {
            let tri = [tri[0], tri[1], tri[2]];
            stats.triangles += 1;
            let coverage = rasterize(&tri, &self.config, |x, y, frag_coord, varying| {
                target.write(x, y, self.program.fragment(frag_coord, varying), mask);
            });
            match coverage {
                Coverage::Drawn(n) => stats.fragments += n,
                Coverage::Culled => {
                    log::debug!("triangle {t} culled");
                    stats.culled += 1;
                }
                Coverage::Degenerate => log::debug!("triangle {t} is degenerate, skipped"),
            }
        }

        log::debug!(
            "drew {} triangles ({} culled), {} fragments",
            stats.triangles,
            stats.culled,
            stats.fragments
        );
        Ok(stats)
    }
}
