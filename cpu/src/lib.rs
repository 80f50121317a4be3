//! CPU reference pipeline for the triangle shaders.
//!
//! Plays the host's part around the stages in `triangle-shaders`: checks a
//! draw against the program's input contract, runs the vertex stage once per
//! vertex, rasterizes the triangle list and runs the fragment stage once per
//! covered pixel into a [`RenderTarget`].

pub mod config;
pub mod draw;
pub mod error;
pub mod layout;
pub mod logging;
pub mod pipeline;
pub mod program;
pub mod raster;
pub mod target;

pub use config::{ColorWrites, Face, FrontFace, RasterConfig};
pub use draw::Draw;
pub use error::DrawError;
pub use layout::VertexBuffer;
pub use pipeline::{DrawStats, Pipeline};
pub use program::{ColoredProgram, FlatProgram, Program, Varying};
pub use target::RenderTarget;
