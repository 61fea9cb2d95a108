//! Hover tooltip: content, anchor and a fading opacity.
//!
//! Opacity changes are transitions with cubic in-out easing. Starting a new
//! transition picks up from the opacity at that instant, so a fade-out that
//! interrupts a half-finished fade-in starts from wherever the fade-in got to.
//! The most recent transition always wins.

use eframe::egui::Pos2;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    from: f32,
    to: f32,
    /// Seconds, same clock as the `now` arguments.
    start: f64,
    duration: f64,
}

impl Transition {
    fn value_at(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ((now - self.start) / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_cubic_in_out(t) as f32
    }

    fn finished_at(&self, now: f64) -> bool {
        now >= self.start + self.duration
    }
}

/// Symmetric cubic easing, slow at both ends.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    text: String,
    anchor: Pos2,
    transition: Transition,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            text: String::new(),
            anchor: Pos2::ZERO,
            transition: Transition {
                from: 0.0,
                to: 0.0,
                start: 0.0,
                duration: 0.0,
            },
        }
    }
}

impl TooltipState {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Top-left corner of the tooltip in surface coordinates.
    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn opacity(&self, now: f64) -> f32 {
        self.transition.value_at(now)
    }

    /// Opacity the current transition is heading towards.
    pub fn target_opacity(&self) -> f32 {
        self.transition.to
    }

    pub fn is_animating(&self, now: f64) -> bool {
        !self.transition.finished_at(now) && self.transition.from != self.transition.to
    }

    pub fn is_visible(&self, now: f64) -> bool {
        self.opacity(now) > 0.0
    }

    /// Replace the content and fade towards `opacity`.
    pub fn show(
        &mut self,
        text: impl Into<String>,
        anchor: Pos2,
        now: f64,
        duration: f64,
        opacity: f32,
    ) {
        self.fade_to(opacity, now, duration);
        self.text = text.into();
        self.anchor = anchor;
    }

    /// Fade out. Content and anchor stay as they were.
    pub fn hide(&mut self, now: f64, duration: f64) {
        self.fade_to(0.0, now, duration);
    }

    fn fade_to(&mut self, to: f32, now: f64, duration: f64) {
        let from = self.opacity(now);
        self.transition = Transition {
            from,
            to,
            start: now,
            duration: duration.max(0.0),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert!((ease_cubic_in_out(0.5) - 0.5).abs() < 1e-12);
        assert!(ease_cubic_in_out(0.25) < 0.25);
        assert!(ease_cubic_in_out(0.75) > 0.75);
    }
}
