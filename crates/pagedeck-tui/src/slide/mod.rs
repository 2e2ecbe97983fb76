//! Slide transition system for the terminal pager.
//!
//! Page transitions interpolate the pager's horizontal offset over time
//! with configurable easing, both for programmatic navigation and for the
//! snap after a drag gesture ends.
//!
//! - `easing` - pure easing functions
//! - `timing` - progress and interpolation utilities
//! - `animation` - the `SlideAnimator` controller combining the two

pub mod animation;
pub mod easing;
pub mod timing;

pub use animation::SlideAnimator;
pub use easing::EasingTypeExt;
