const RAMP_ACCELERATION: f32 = 0.07;

/// Iteration budgets for the intro animation, growing from 1 towards `target`.
///
/// Each step adds the whole part of an accumulator that itself grows by
/// 0.07 per step, so the ramp starts slowly and speeds up. `target` itself
/// is never emitted.
#[must_use]
pub fn iteration_ramp(target: u32) -> Vec<u32> {
    let mut budgets = Vec::new();
    let mut frame: f32 = 0.0;
    let mut budget: u32 = 1;

    while budget < target {
        budgets.push(budget);
        frame += RAMP_ACCELERATION;
        budget = budget.saturating_add(frame as u32);
    }

    budgets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_is_empty_when_target_is_reached_immediately() {
        assert!(iteration_ramp(0).is_empty());
        assert!(iteration_ramp(1).is_empty());
    }

    #[test]
    fn ramp_starts_at_one_and_lingers() {
        let ramp = iteration_ramp(100);

        assert_eq!(ramp[0], 1);
        assert!(ramp.iter().take(10).all(|&budget| budget == 1));
    }

    #[test]
    fn ramp_is_non_decreasing_and_below_target() {
        let ramp = iteration_ramp(100);

        assert!(ramp.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(ramp.iter().all(|&budget| budget < 100));
        assert!(*ramp.last().unwrap() > 50);
    }
}
