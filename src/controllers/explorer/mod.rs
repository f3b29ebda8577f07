//! Application-layer facade over the fractal core.
//!
//! A presentation shell (window, input, frame pacing) drives a
//! [`FractalExplorer`] with zoom and precompute commands and reads back
//! fields and colours. All state lives in memory for the life of the
//! explorer.

mod config;
mod controller;
mod errors;

pub use config::{DEFAULT_COLOUR_SMOOTHING, DEFAULT_WINDOW_SIZE, ExplorerConfig};
pub use controller::FractalExplorer;
pub use errors::ExplorerError;
