mod controllers;
mod core;
mod presenters;

pub use controllers::cli::render::CliRenderController;
pub use controllers::explorer::{
    DEFAULT_COLOUR_SMOOTHING, DEFAULT_WINDOW_SIZE, ExplorerConfig, ExplorerError, FractalExplorer,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use presenters::file::ppm::PpmFilePresenter;

pub use core::actions::compute_field::{FieldStrategy, compute_field};
pub use core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use core::colour_mapping::errors::ColourMapError;
pub use core::colour_mapping::factory::colour_map_factory;
pub use core::colour_mapping::kinds::ColourSchemeKind;
pub use core::colour_mapping::map::EscapeColourMap;
pub use core::colour_mapping::maps::rainbow_wheel::{RainbowWheel, rainbow_wheel, wheel_colour};
pub use core::colour_mapping::maps::wave::{Wave, wave};
pub use core::data::colour::Colour;
pub use core::data::complex::Complex;
pub use core::data::divergence_field::{DivergenceField, DivergenceFieldError};
pub use core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use core::data::point::Point;
pub use core::data::viewport::{ViewportConfig, ViewportError};
pub use core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
pub use core::fractals::escape_time::errors::FractalParamsError;
pub use core::fractals::escape_time::params::{
    DEFAULT_ESCAPE_RADIUS, DEFAULT_MAX_ITERATIONS, FractalParams,
};
pub use core::fractals::escape_time::recurrence::{
    DEFAULT_JULIA_CONSTANT, RecurrenceKind, RecurrenceMode,
};
pub use core::fractals::escape_time::termination::TerminationPolicy;
pub use core::util::iteration_ramp::iteration_ramp;
pub use core::util::pixel_to_complex_coords::pixel_to_complex_coords;
pub use core::zoom::{
    PrecomputeCache, PrecomputeError, PrecomputedSequence, SCALE_FACTOR, ZOOMS, ZoomController,
    build_sequence,
};
