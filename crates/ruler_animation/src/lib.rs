//! Ruler Animation
//!
//! Easing curves and frame-driven tweens for ruler motion.
//!
//! # Features
//!
//! - **Easing**: decelerate and ease-out curves
//! - **Tweens**: one scalar over a fixed duration, advanced by the host frame loop
//!
//! # Example
//!
//! ```rust
//! use ruler_animation::{Easing, Tween};
//!
//! let mut tween = Tween::new(0.0, 40.0, 100, Easing::Decelerate);
//! while !tween.advance(16.0) {}
//! assert_eq!(tween.value(), 40.0);
//! ```

pub mod easing;
pub mod tween;

pub use easing::Easing;
pub use tween::Tween;
