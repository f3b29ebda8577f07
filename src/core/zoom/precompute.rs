use crate::core::actions::compute_field::{FieldStrategy, compute_field};
use crate::core::data::divergence_field::{DivergenceField, DivergenceFieldError};
use crate::core::data::point::Point;
use crate::core::data::viewport::ViewportConfig;
use crate::core::fractals::escape_time::params::FractalParams;
use crate::core::zoom::controller::zoom_in_about;
use log::debug;
use std::error::Error;
use std::fmt;
use std::time::Instant;

/// Default number of zoom levels built per precompute request.
pub const ZOOMS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub enum PrecomputeError {
    AnchorOutsideWindow(DivergenceFieldError),
    LevelOutOfRange { level: usize, length: usize },
}

impl fmt::Display for PrecomputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnchorOutsideWindow(err) => write!(f, "precompute anchor: {}", err),
            Self::LevelOutOfRange { level, length } => {
                write!(
                    f,
                    "precomputed level {} out of range for sequence of length {}",
                    level, length
                )
            }
        }
    }
}

impl Error for PrecomputeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AnchorOutsideWindow(err) => Some(err),
            Self::LevelOutOfRange { .. } => None,
        }
    }
}

/// Fields for successive zoom-ins about one anchor pixel, shallowest first.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecomputedSequence {
    anchor: Point,
    levels: Vec<DivergenceField>,
}

impl PrecomputedSequence {
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, level: usize) -> Result<&DivergenceField, PrecomputeError> {
        self.levels.get(level).ok_or(PrecomputeError::LevelOutOfRange {
            level,
            length: self.levels.len(),
        })
    }
}

/// Walks up to `max_levels` zoom-ins about `anchor`, starting from
/// `viewport`, and stores each level's field. `max_levels` is capped at
/// [`ZOOMS`].
///
/// The walk stops right after the first level in which the anchor pixel is
/// bounded, since every deeper level about it adds nothing. The walk runs on
/// a copy, so `viewport` is unchanged afterwards.
pub fn build_sequence(
    anchor: Point,
    viewport: &ViewportConfig,
    params: &FractalParams,
    max_levels: usize,
    scale_factor: f64,
    strategy: FieldStrategy,
) -> Result<PrecomputedSequence, PrecomputeError> {
    let start = Instant::now();
    let max_levels = max_levels.min(ZOOMS);
    let mut walk = *viewport;
    let mut levels = Vec::with_capacity(max_levels);

    for _ in 0..max_levels {
        let field = compute_field(&walk, params, strategy);
        let anchor_value = field
            .value_at(anchor)
            .map_err(PrecomputeError::AnchorOutsideWindow)?;

        levels.push(field);

        if anchor_value == 0 {
            break;
        }

        zoom_in_about(&mut walk, anchor, scale_factor);
    }

    debug!(
        "precomputed {} of {} zoom levels about ({}, {}) in {:.3}s",
        levels.len(),
        max_levels,
        anchor.x,
        anchor.y,
        start.elapsed().as_secs_f64()
    );

    Ok(PrecomputedSequence { anchor, levels })
}

/// Holds at most one precomputed sequence, replaced wholesale on rebuild.
#[derive(Debug, Default)]
pub struct PrecomputeCache {
    sequence: Option<PrecomputedSequence>,
}

impl PrecomputeCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a new sequence and returns its length. The previous sequence
    /// is dropped first, and stays dropped if the build fails.
    pub fn build(
        &mut self,
        anchor: Point,
        viewport: &ViewportConfig,
        params: &FractalParams,
        max_levels: usize,
        scale_factor: f64,
        strategy: FieldStrategy,
    ) -> Result<usize, PrecomputeError> {
        self.sequence = None;

        let sequence = build_sequence(anchor, viewport, params, max_levels, scale_factor, strategy)?;
        let length = sequence.len();
        self.sequence = Some(sequence);

        Ok(length)
    }

    #[must_use]
    pub fn sequence(&self) -> Option<&PrecomputedSequence> {
        self.sequence.as_ref()
    }

    pub fn clear(&mut self) {
        self.sequence = None;
    }
}
