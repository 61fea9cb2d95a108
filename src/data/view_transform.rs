//! Pan/zoom state applied to the whole drawing surface.

use eframe::egui::{pos2, Pos2, Vec2};

use crate::config::ZoomConfig;

/// Translation plus uniform scale: `p' = (x + k * p.x, y + k * p.y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub x: f32,
    pub y: f32,
    pub k: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A user gesture that changes the view transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomGesture {
    /// Mouse wheel; positive `delta_y` scrolls down and zooms out.
    Wheel { pointer: Pos2, delta_y: f32 },
    /// Multiplicative zoom, e.g. from a touchpad pinch.
    Pinch { pointer: Pos2, factor: f32 },
    /// Pan by a surface-space delta.
    Drag { delta: Vec2 },
    /// Double click zooms in by 2x (out by 2x when `zoom_out`).
    DoubleClick { pointer: Pos2, zoom_out: bool },
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        k: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn apply(&self, p: Pos2) -> Pos2 {
        pos2(self.x + self.k * p.x, self.y + self.k * p.y)
    }

    pub fn invert(&self, p: Pos2) -> Pos2 {
        pos2((p.x - self.x) / self.k, (p.y - self.y) / self.k)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Multiply the scale by `factor`, clamped to `extent`, keeping the
    /// surface point currently under `pointer` in place.
    pub fn scale_about(&mut self, pointer: Pos2, factor: f32, extent: (f32, f32)) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let anchor = self.invert(pointer);
        let k = (self.k * factor).clamp(extent.0, extent.1);
        self.k = k;
        self.x = pointer.x - anchor.x * k;
        self.y = pointer.y - anchor.y * k;
    }

    /// Apply a gesture. Returns `true` if the transform changed.
    pub fn apply_gesture(&mut self, gesture: ZoomGesture, cfg: &ZoomConfig) -> bool {
        let before = *self;
        match gesture {
            ZoomGesture::Wheel { pointer, delta_y } => {
                let factor = 2f32.powf(-delta_y * cfg.wheel_sensitivity);
                self.scale_about(pointer, factor, cfg.scale_extent);
            }
            ZoomGesture::Pinch { pointer, factor } => {
                self.scale_about(pointer, factor, cfg.scale_extent);
            }
            ZoomGesture::Drag { delta } => self.translate(delta),
            ZoomGesture::DoubleClick { pointer, zoom_out } => {
                let factor = if zoom_out { 0.5 } else { 2.0 };
                self.scale_about(pointer, factor, cfg.scale_extent);
            }
        }
        *self != before
    }
}
