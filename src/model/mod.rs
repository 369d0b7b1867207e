//! Domain types shared across the pipeline.

pub mod event;
pub mod platform;
pub mod state;
