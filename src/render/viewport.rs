//! World-to-surface transform fitted to a bounding box.

use crate::geometry::{Bounds, Point};

/// Uniform scale plus translation mapping world coordinates onto the surface.
///
/// The surface origin is its top-left corner with Y growing downwards; world
/// Y grows upwards, so the transform flips it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Surface units per world unit.
    pub scale: f64,
    /// World point shown at the surface centre.
    pub center: Point,
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
}

impl Viewport {
    /// Fit `bounds` into a `width` × `height` surface, centred.
    ///
    /// `bounds` should have a non-zero extent on at least one axis; a box
    /// too small to measure at its magnitude falls back to a scale of 1.
    pub fn fit(bounds: &Bounds, width: f64, height: f64) -> Self {
        let scale = (width / bounds.width()).min(height / bounds.height());
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        Self {
            scale,
            center: bounds.center(),
            width,
            height,
        }
    }

    /// Map a world point to surface coordinates.
    pub fn to_surface(&self, p: Point) -> Point {
        Point::new(
            self.width / 2.0 + (p.x - self.center.x) * self.scale,
            self.height / 2.0 - (p.y - self.center.y) * self.scale,
        )
    }

    /// Map a surface point back to world coordinates.
    pub fn to_world(&self, p: Point) -> Point {
        Point::new(
            self.center.x + (p.x - self.width / 2.0) / self.scale,
            self.center.y - (p.y - self.height / 2.0) / self.scale,
        )
    }

    /// World rectangle covered by the whole surface.
    pub fn visible_world(&self) -> Bounds {
        let half_w = self.width / 2.0 / self.scale;
        let half_h = self.height / 2.0 / self.scale;
        Bounds {
            min_x: self.center.x - half_w,
            max_x: self.center.x + half_w,
            min_y: self.center.y - half_h,
            max_y: self.center.y + half_h,
        }
    }
}
