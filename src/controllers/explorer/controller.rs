use crate::controllers::explorer::config::ExplorerConfig;
use crate::controllers::explorer::errors::ExplorerError;
use crate::core::actions::compute_field::compute_field;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::colour_mapping::map::EscapeColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::divergence_field::DivergenceField;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::viewport::ViewportConfig;
use crate::core::fractals::escape_time::params::FractalParams;
use crate::core::fractals::escape_time::recurrence::RecurrenceMode;
use crate::core::util::iteration_ramp::iteration_ramp;
use crate::core::zoom::{PrecomputeCache, PrecomputedSequence, ZOOMS, ZoomController};
use log::info;

struct Session {
    config: ExplorerConfig,
    params: FractalParams,
    zoom: ZoomController,
    field: DivergenceField,
    precompute: PrecomputeCache,
    browse_level: Option<usize>,
    colour_map: Box<dyn EscapeColourMap>,
}

impl Session {
    fn recompute(&mut self) {
        self.field = compute_field(self.zoom.viewport(), &self.params, self.config.strategy);
    }

    fn rebuild_colour_map(&mut self) {
        self.colour_map = colour_map_factory(
            self.config.colour_scheme,
            self.params.max_iterations(),
            self.config.colour_smoothing,
        );
    }

    fn discard_precomputed(&mut self) {
        self.precompute.clear();
        self.browse_level = None;
    }

    /// Moves the browse cursor by one level, staying inside the sequence.
    fn browse_step(&mut self, deeper: bool) {
        let (Some(level), Some(sequence)) = (self.browse_level, self.precompute.sequence()) else {
            return;
        };

        let target = if deeper {
            (level + 1).min(sequence.len().saturating_sub(1))
        } else {
            level.saturating_sub(1)
        };

        self.browse_level = Some(target);
        info!("precomputed level {} of {}", target, sequence.len());
    }
}

/// The fractal engine behind a presentation shell.
///
/// Holds the live viewport, the fractal parameters, the live divergence
/// field and an optional precomputed zoom sequence. Every command is
/// synchronous: when it returns, the affected field is fully rebuilt.
#[derive(Default)]
pub struct FractalExplorer {
    session: Option<Session>,
}

impl FractalExplorer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) a session at the default view and computes its
    /// first field. On error the previous session, if any, is kept.
    pub fn configure(&mut self, config: ExplorerConfig) -> Result<(), ExplorerError> {
        if !config.colour_smoothing.is_finite() || config.colour_smoothing <= 0.0 {
            return Err(ExplorerError::InvalidColourSmoothing {
                smoothing: config.colour_smoothing,
            });
        }

        if config.max_precompute_levels > ZOOMS {
            return Err(ExplorerError::TooManyPrecomputeLevels {
                levels: config.max_precompute_levels,
                max_levels: ZOOMS,
            });
        }

        let params = config.fractal_params()?;
        let zoom = ZoomController::new(config.window_size, config.scale_factor)?;
        let field = compute_field(zoom.viewport(), &params, config.strategy);
        let colour_map = colour_map_factory(
            config.colour_scheme,
            params.max_iterations(),
            config.colour_smoothing,
        );

        info!(
            "configured {} explorer: {}x{} window, {} iterations",
            params.display_name(),
            config.window_size,
            config.window_size,
            params.max_iterations()
        );

        self.session = Some(Session {
            config,
            params,
            zoom,
            field,
            precompute: PrecomputeCache::new(),
            browse_level: None,
            colour_map,
        });

        Ok(())
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.session.is_some()
    }

    fn session(&self) -> Result<&Session, ExplorerError> {
        self.session.as_ref().ok_or(ExplorerError::NotConfigured)
    }

    fn session_mut(&mut self) -> Result<&mut Session, ExplorerError> {
        self.session.as_mut().ok_or(ExplorerError::NotConfigured)
    }

    pub fn config(&self) -> Result<&ExplorerConfig, ExplorerError> {
        Ok(&self.session()?.config)
    }

    pub fn viewport(&self) -> Result<&ViewportConfig, ExplorerError> {
        Ok(self.session()?.zoom.viewport())
    }

    pub fn params(&self) -> Result<&FractalParams, ExplorerError> {
        Ok(&self.session()?.params)
    }

    pub fn recompute_field(&mut self) -> Result<&DivergenceField, ExplorerError> {
        let session = self.session_mut()?;
        session.recompute();

        Ok(&session.field)
    }

    /// The field for the live viewport, ignoring any precomputed browsing.
    pub fn live_field(&self) -> Result<&DivergenceField, ExplorerError> {
        Ok(&self.session()?.field)
    }

    /// The field a shell should display: the browsed precomputed level when
    /// browsing, otherwise the live field.
    pub fn current_field(&self) -> Result<&DivergenceField, ExplorerError> {
        let session = self.session()?;

        match (session.browse_level, session.precompute.sequence()) {
            (Some(level), Some(sequence)) => Ok(sequence.level(level)?),
            _ => Ok(&session.field),
        }
    }

    /// Zooms in about `pixel`, or moves one precomputed level deeper while
    /// browsing a sequence.
    pub fn zoom_in(&mut self, pixel: Point) -> Result<(), ExplorerError> {
        let session = self.session_mut()?;

        if session.browse_level.is_some() {
            session.browse_step(true);
        } else {
            session.zoom.zoom_in(pixel);
            session.recompute();
        }

        Ok(())
    }

    pub fn zoom_out(&mut self) -> Result<(), ExplorerError> {
        let session = self.session_mut()?;

        if session.browse_level.is_some() {
            session.browse_step(false);
        } else {
            session.zoom.zoom_out();
            session.recompute();
        }

        Ok(())
    }

    /// Back to the default view. Also leaves precomputed browsing.
    pub fn reset(&mut self) -> Result<(), ExplorerError> {
        let session = self.session_mut()?;

        session.discard_precomputed();
        session.zoom.reset();
        session.recompute();

        Ok(())
    }

    /// Builds a zoom sequence about `anchor` from the live view and starts
    /// browsing it at level 0. Returns the sequence length. Requests deeper
    /// than the configured `max_precompute_levels` are cut to it.
    pub fn start_precompute(&mut self, anchor: Point, max_levels: usize) -> Result<usize, ExplorerError> {
        let session = self.session_mut()?;
        let max_levels = max_levels.min(session.config.max_precompute_levels);

        session.browse_level = None;
        let length = session.precompute.build(
            anchor,
            session.zoom.viewport(),
            &session.params,
            max_levels,
            session.zoom.scale_factor(),
            session.config.strategy,
        )?;

        if length > 0 {
            session.browse_level = Some(0);
        }

        info!("precomputation is on: {} levels", length);

        Ok(length)
    }

    pub fn stop_precompute(&mut self) -> Result<(), ExplorerError> {
        self.session_mut()?.discard_precomputed();

        info!("precomputation is off");

        Ok(())
    }

    pub fn precomputed_sequence(&self) -> Result<Option<&PrecomputedSequence>, ExplorerError> {
        Ok(self.session()?.precompute.sequence())
    }

    pub fn browse_level(&self) -> Result<Option<usize>, ExplorerError> {
        Ok(self.session()?.browse_level)
    }

    /// Looks up level `level` of the active sequence and makes it the
    /// browsed level. Levels outside the sequence are rejected, not clamped.
    pub fn select_precomputed_level(&mut self, level: usize) -> Result<&DivergenceField, ExplorerError> {
        let session = self.session_mut()?;
        let sequence = session
            .precompute
            .sequence()
            .ok_or(ExplorerError::NoPrecomputedSequence)?;

        let field = sequence.level(level)?;
        session.browse_level = Some(level);

        Ok(field)
    }

    /// Colour for a non-zero divergence value. `0` is the background
    /// sentinel and is rejected; shells should skip those pixels.
    pub fn colour_for(&self, divergence: u32) -> Result<Colour, ExplorerError> {
        Ok(self.session()?.colour_map.map(divergence)?)
    }

    /// Paints [`current_field`](Self::current_field) with the session's colour map.
    pub fn render_current(&self) -> Result<PixelBuffer, ExplorerError> {
        let session = self.session()?;

        Ok(generate_pixel_buffer(self.current_field()?, &session.colour_map)?)
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), ExplorerError> {
        let session = self.session_mut()?;

        session.params.set_max_iterations(max_iterations)?;
        session.config.max_iterations = max_iterations;
        session.rebuild_colour_map();
        session.discard_precomputed();
        session.recompute();

        Ok(())
    }

    pub fn set_recurrence_mode(&mut self, mode: RecurrenceMode) -> Result<(), ExplorerError> {
        let session = self.session_mut()?;

        session.params.set_mode(mode);
        session.config.mode = mode;
        session.discard_precomputed();
        session.recompute();

        Ok(())
    }

    /// Replays the intro: one field per budget of
    /// [`iteration_ramp`](crate::core::util::iteration_ramp::iteration_ramp)
    /// up to the configured budget, handed to `on_frame` in order. The live
    /// field is recomputed at the configured budget afterwards.
    pub fn play_intro<F>(&mut self, mut on_frame: F) -> Result<(), ExplorerError>
    where
        F: FnMut(u32, &DivergenceField),
    {
        let session = self.session_mut()?;

        for budget in iteration_ramp(session.params.max_iterations()) {
            let mut params = session.params;
            params.set_max_iterations(budget)?;

            let field = compute_field(session.zoom.viewport(), &params, session.config.strategy);
            on_frame(budget, &field);
        }

        session.recompute();
        info!("intro finished at {} iterations", session.params.max_iterations());

        Ok(())
    }
}
