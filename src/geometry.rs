//! Points, bounding boxes and the pixel rounding rule.

/// A 2D coordinate, continuous or already snapped to the pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate, increasing upwards.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Snap both coordinates to the nearest pixel.
    pub fn rounded(self) -> Self {
        Self::new(round_half_up(self.x), round_half_up(self.y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Round to the nearest integer, ties towards positive infinity.
///
/// `2.5` becomes `3` and `-2.5` becomes `-2`, the same as the browser's
/// `Math.round` the step tables were first published with.
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Axis-aligned rectangle in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest X.
    pub min_x: f64,
    /// Largest X.
    pub max_x: f64,
    /// Smallest Y.
    pub min_y: f64,
    /// Largest Y.
    pub max_y: f64,
}

impl Bounds {
    /// Minimal rectangle containing every point, `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(points.iter().skip(1).fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Centre of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Widen any axis narrower than `min_extent` symmetrically around its centre.
    ///
    /// A `min_extent` that is not a positive number is treated as 1.
    pub fn with_min_extent(self, min_extent: f64) -> Self {
        let min_extent = if min_extent > 0.0 && min_extent.is_finite() {
            min_extent
        } else {
            1.0
        };
        let (min_x, max_x) = widen(self.min_x, self.max_x, min_extent);
        let (min_y, max_y) = widen(self.min_y, self.max_y, min_extent);
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Whether `p` lies inside or on the border, with tolerance `eps`.
    pub fn contains(&self, p: Point, eps: f64) -> bool {
        p.x >= self.min_x - eps
            && p.x <= self.max_x + eps
            && p.y >= self.min_y - eps
            && p.y <= self.max_y + eps
    }
}

fn widen(lo: f64, hi: f64, min_extent: f64) -> (f64, f64) {
    if hi - lo >= min_extent {
        return (lo, hi);
    }
    let mid = (lo + hi) / 2.0;
    (mid - min_extent / 2.0, mid + min_extent / 2.0)
}
