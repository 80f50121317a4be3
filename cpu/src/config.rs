use bitflags::bitflags;
use triangle_shaders::glam::{vec4, Vec4};

bitflags! {
    /// Channels of the colour target a pipeline is allowed to write.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct ColorWrites: u8 {
        const RED = 1 << 0;
        const GREEN = 1 << 1;
        const BLUE = 1 << 2;
        const ALPHA = 1 << 3;
        const COLOR = Self::RED.bits() | Self::GREEN.bits() | Self::BLUE.bits();
        const ALL = Self::COLOR.bits() | Self::ALPHA.bits();
    }
}

/// Winding order that counts as facing the viewer, measured in NDC (y up).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FrontFace {
    #[default]
    Ccw,
    Cw,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

/// Fixed-function state shared by every draw of a pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterConfig {
    /// Target size in pixels; neither may be 0.
    pub width: u32,
    pub height: u32,
    /// Colour the target is cleared to before the first draw.
    pub clear_color: Vec4,
    pub front_face: FrontFace,
    /// Faces that are discarded before rasterization, `None` keeps both.
    pub cull_mode: Option<Face>,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            clear_color: vec4(0.0, 0.0, 0.0, 1.0),
            front_face: FrontFace::Ccw,
            cull_mode: Some(Face::Back),
        }
    }
}

impl RasterConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}
