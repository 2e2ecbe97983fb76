//! Slide animation controller.
//!
//! Interpolates the pager's horizontal offset towards a target over a
//! fixed duration. Call [`SlideAnimator::slide_to`] to begin, then
//! [`SlideAnimator::update`] each frame.

use std::time::{Duration, Instant};

use pagedeck_core::{EasingType, SlideConfig};

use super::easing::EasingTypeExt;
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone)]
struct ActiveSlide {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Animates a horizontal offset in column units.
#[derive(Debug, Clone)]
pub struct SlideAnimator {
    slide: Option<ActiveSlide>,
    config: SlideConfig,
    offset: f64,
}

impl SlideAnimator {
    pub fn new(config: SlideConfig) -> Self {
        Self {
            slide: None,
            config,
            offset: 0.0,
        }
    }

    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    /// Frame interval implied by the configured animation fps.
    pub fn tick_duration(&self) -> Duration {
        if self.config.fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.config.fps as u64)
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }

    /// Current interpolated offset.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Final offset once any active slide completes.
    pub fn target(&self) -> f64 {
        self.slide.as_ref().map(|s| s.to).unwrap_or(self.offset)
    }

    /// Move immediately, cancelling any active slide.
    pub fn set_offset(&mut self, offset: f64) {
        self.slide = None;
        self.offset = offset;
    }

    /// Begin a slide to `target`. Jumps when smooth animation is disabled
    /// or the offset is already there.
    pub fn slide_to(&mut self, target: f64) {
        if !self.is_smooth() {
            self.set_offset(target);
            return;
        }

        let from = self.offset;
        if (from - target).abs() < f64::EPSILON {
            self.slide = None;
            return;
        }

        self.slide = Some(ActiveSlide {
            start: Instant::now(),
            from,
            to: target,
            duration: Duration::from_millis(self.config.duration_ms),
            easing: self.config.easing,
        });
    }

    /// Advance the active slide. Returns `true` exactly once, on the frame
    /// the slide completes.
    pub fn update(&mut self) -> bool {
        let Some(slide) = self.slide.as_ref() else {
            return false;
        };

        if is_complete(slide.start, slide.duration) {
            self.offset = slide.to;
            self.slide = None;
            return true;
        }

        let t = progress(slide.start, slide.duration);
        let eased = slide.easing.apply(t);
        self.offset = lerp(slide.from, slide.to, eased);
        false
    }

    /// Stop at the current offset.
    pub fn cancel(&mut self) {
        self.slide = None;
    }

    fn is_smooth(&self) -> bool {
        self.config.smooth_enabled && self.config.duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth(duration_ms: u64) -> SlideConfig {
        SlideConfig {
            smooth_enabled: true,
            duration_ms,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_jump_when_smooth_disabled() {
        let config = SlideConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = SlideAnimator::new(config);

        animator.slide_to(160.0);
        assert_eq!(animator.offset(), 160.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_slide_starts_and_targets() {
        let mut animator = SlideAnimator::new(smooth(100));

        animator.slide_to(80.0);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 80.0);
        assert_eq!(animator.offset(), 0.0);
    }

    #[test]
    fn test_slide_to_current_offset_is_a_no_op() {
        let mut animator = SlideAnimator::new(smooth(100));
        animator.set_offset(80.0);

        animator.slide_to(80.0);
        assert!(!animator.is_animating());
        assert!(!animator.update());
    }

    #[test]
    fn test_zero_duration_completes_on_first_update() {
        let mut animator = SlideAnimator::new(smooth(0));
        animator.slide_to(80.0);
        // duration 0 means smooth is effectively off
        assert_eq!(animator.offset(), 80.0);
        assert!(!animator.update());
    }

    #[test]
    fn test_update_reports_completion_once() {
        let mut animator = SlideAnimator::new(smooth(1));
        animator.slide_to(80.0);

        std::thread::sleep(Duration::from_millis(5));
        assert!(animator.update());
        assert_eq!(animator.offset(), 80.0);
        assert!(!animator.update());
    }

    #[test]
    fn test_set_offset_cancels_slide() {
        let mut animator = SlideAnimator::new(smooth(1000));
        animator.slide_to(80.0);
        animator.set_offset(40.0);

        assert!(!animator.is_animating());
        assert_eq!(animator.offset(), 40.0);
        assert_eq!(animator.target(), 40.0);
    }
}
