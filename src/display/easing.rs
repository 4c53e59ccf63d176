//! Easing curves for displayed-value transitions.

use serde::{Deserialize, Serialize};

/// Maps linear transition progress to displayed progress.
///
/// Both curves map 0 to 0 and 1 to exactly 1, and never leave `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Exponential ease-out: fast start, decelerating into the target.
    #[default]
    EaseOutExpo,
    /// Constant speed.
    Linear,
}

impl Easing {
    /// Applies the curve to `t`, clamped to `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use earnings_ticker::display::Easing;
    ///
    /// assert_eq!(Easing::EaseOutExpo.apply(0.0), 0.0);
    /// assert_eq!(Easing::EaseOutExpo.apply(1.0), 1.0);
    /// assert!(Easing::EaseOutExpo.apply(0.5) > Easing::Linear.apply(0.5));
    /// ```
    pub fn apply(self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Easing::Linear => t,
            // Scaled by 1024/1023 so that t = 1 lands exactly on the target
            // instead of 2^-10 short of it.
            Easing::EaseOutExpo => ((1.0 - 2f64.powf(-10.0 * t)) * 1024.0 / 1023.0).min(1.0),
        }
    }
}
