//! Presentation-side state for the earnings counters.
//!
//! This module contains the easing curves, the per-counter
//! [`ValueAnimator`] state machine, and the [`EarningsBoard`] sink that feeds
//! each tick into three animators. Number formatting is left to renderers.

mod animator;
mod board;
mod easing;

pub use animator::{AnimationPhase, DisplayState, Transition, TransitionFrames, ValueAnimator};
pub use board::{BoardSnapshot, EarningsBoard};
pub use easing::Easing;
