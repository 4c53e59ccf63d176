//! Eased transitions between displayed values.
//!
//! A [`ValueAnimator`] owns the value currently shown for one counter. Each
//! new target starts a [`Transition`] from whatever is on screen at that
//! moment, so retargeting mid-flight never jumps back to an older start.

use std::time::{Duration, Instant};

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::config::AnimationConfig;

use super::easing::Easing;

/// Phase of a [`ValueAnimator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Showing a settled value.
    Idle,
    /// Moving towards a target.
    Animating,
}

/// One eased move from a start value to a target.
///
/// A transition is a plain value: it can be sampled at any elapsed time and
/// replayed as often as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    from: Decimal,
    to: Decimal,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    /// Creates a transition from `from` to `to` over `duration`.
    pub fn new(from: Decimal, to: Decimal, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
        }
    }

    /// Returns the start value.
    pub fn start(&self) -> Decimal {
        self.from
    }

    /// Returns the target value.
    pub fn target(&self) -> Decimal {
        self.to
    }

    /// Returns the transition duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the displayed value `elapsed` into the transition.
    ///
    /// The result always lies between `from` and `to` inclusive, and equals
    /// `to` once `elapsed >= duration`.
    ///
    /// # Example
    ///
    /// ```
    /// use earnings_ticker::display::{Easing, Transition};
    /// use rust_decimal::Decimal;
    /// use std::time::Duration;
    ///
    /// let transition = Transition::new(
    ///     Decimal::ZERO,
    ///     Decimal::new(100, 0),
    ///     Duration::from_secs(1),
    ///     Easing::Linear,
    /// );
    /// assert_eq!(transition.value_at(Duration::from_millis(250)), Decimal::new(25, 0));
    /// assert_eq!(transition.value_at(Duration::from_secs(2)), Decimal::new(100, 0));
    /// ```
    pub fn value_at(&self, elapsed: Duration) -> Decimal {
        if elapsed >= self.duration {
            return self.to;
        }

        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let progress = Decimal::from_f64(self.easing.apply(t)).unwrap_or(Decimal::ZERO);
        let value = self.from + (self.to - self.from) * progress;

        let (low, high) = if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        };
        value.clamp(low, high)
    }

    /// Returns a lazy, finite sequence of frames spaced `frame_interval`
    /// apart, starting at the start value and ending exactly at the target.
    ///
    /// A zero interval yields the target alone.
    pub fn frames(&self, frame_interval: Duration) -> TransitionFrames {
        TransitionFrames {
            transition: *self,
            step: frame_interval,
            next: Some(if frame_interval.is_zero() {
                self.duration
            } else {
                Duration::ZERO
            }),
        }
    }
}

/// Iterator over the frames of a [`Transition`].
#[derive(Debug, Clone)]
pub struct TransitionFrames {
    transition: Transition,
    step: Duration,
    next: Option<Duration>,
}

impl Iterator for TransitionFrames {
    type Item = Decimal;

    fn next(&mut self) -> Option<Decimal> {
        let elapsed = self.next?;
        let duration = self.transition.duration;

        self.next = if elapsed >= duration {
            None
        } else {
            Some((elapsed + self.step).min(duration))
        };

        Some(self.transition.value_at(elapsed))
    }
}

/// The mutable display state of one counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// The value most recently shown.
    pub current_displayed: Decimal,
    /// The value being animated towards.
    pub target: Decimal,
    /// When the current transition began, if one ever has.
    pub animation_started_at: Option<Instant>,
}

/// Animates one displayed number towards successive targets.
///
/// Idle → Animating on [`transition_to`](Self::transition_to); back to Idle
/// when a [`sample`](Self::sample) reaches the end of the duration.
/// Retargeting while Animating stays in Animating and restarts the clock
/// from the value displayed at that instant.
#[derive(Debug, Clone)]
pub struct ValueAnimator {
    state: DisplayState,
    active: Option<Transition>,
    duration: Duration,
    easing: Easing,
}

impl ValueAnimator {
    /// Creates an idle animator showing `initial`.
    pub fn new(initial: Decimal, config: &AnimationConfig) -> Self {
        Self {
            state: DisplayState {
                current_displayed: initial,
                target: initial,
                animation_started_at: None,
            },
            active: None,
            duration: config.duration(),
            easing: config.easing,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> AnimationPhase {
        if self.active.is_some() {
            AnimationPhase::Animating
        } else {
            AnimationPhase::Idle
        }
    }

    /// Returns the display state as of the last sample.
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Returns the value most recently shown.
    pub fn current(&self) -> Decimal {
        self.state.current_displayed
    }

    /// Starts moving towards `target` from the value displayed at `now`.
    ///
    /// Returns the new transition so a renderer can drive its own frames.
    ///
    /// # Example
    ///
    /// ```
    /// use earnings_ticker::config::AnimationConfig;
    /// use earnings_ticker::display::{AnimationPhase, ValueAnimator};
    /// use rust_decimal::Decimal;
    /// use std::time::{Duration, Instant};
    ///
    /// let mut animator = ValueAnimator::new(Decimal::ZERO, &AnimationConfig::default());
    /// let start = Instant::now();
    ///
    /// animator.transition_to(Decimal::new(100, 0), start);
    /// assert_eq!(animator.phase(), AnimationPhase::Animating);
    ///
    /// let settled = animator.sample(start + Duration::from_secs(1));
    /// assert_eq!(settled, Decimal::new(100, 0));
    /// assert_eq!(animator.phase(), AnimationPhase::Idle);
    /// ```
    pub fn transition_to(&mut self, target: Decimal, now: Instant) -> Transition {
        let from = self.sample(now);
        let transition = Transition::new(from, target, self.duration, self.easing);

        self.state.target = target;
        self.state.animation_started_at = Some(now);
        self.active = Some(transition);

        transition
    }

    /// Samples the displayed value at `now`, updating the display state.
    pub fn sample(&mut self, now: Instant) -> Decimal {
        let (Some(transition), Some(started_at)) = (self.active, self.state.animation_started_at)
        else {
            return self.state.current_displayed;
        };

        let elapsed = now.saturating_duration_since(started_at);
        self.state.current_displayed = transition.value_at(elapsed);

        if elapsed >= transition.duration() {
            self.state.current_displayed = self.state.target;
            self.active = None;
        }

        self.state.current_displayed
    }
}
