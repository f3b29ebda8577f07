/// How the iteration decides a point is done.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TerminationPolicy {
    /// Stop at the first iterate outside the escape square. Returns the
    /// 1-based step, or 0 if the budget runs out.
    #[default]
    EscapeRadius,
    /// Stop once two successive iterates agree after rounding to
    /// `precision_digits` decimals, returning that step. Returns 0 when an
    /// iterate leaves `[-divergence_bound, divergence_bound]^2`, and the
    /// full budget when neither happens.
    Convergence {
        precision_digits: i32,
        divergence_bound: f64,
    },
}

impl TerminationPolicy {
    pub const DEFAULT_CONVERGENCE: Self = Self::Convergence {
        precision_digits: 1,
        divergence_bound: 512.0,
    };
}
