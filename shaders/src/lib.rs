#![cfg_attr(target_arch = "spirv", no_std)]
//! Vertex and fragment stages for the single-triangle pipelines.
//!
//! Every stage is written twice over: once as a plain function that any host
//! code can call, and once as a rust-gpu entry point that forwards to it.

pub mod colored;
pub mod flat;
pub mod interface;

pub use spirv_std::glam;
