//! Digital Differential Analyzer stepper.

use super::{StepRecord, Stepper};
use crate::geometry::{round_half_up, Point};
use crate::table::format_number;

/// One iteration of the DDA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DdaStep {
    /// Iteration index, starting at 0.
    pub k: usize,
    /// Accumulated X.
    pub x: f64,
    /// Accumulated Y.
    pub y: f64,
    /// `(round(x), round(y))`, rounded independently for this step.
    pub rounded: (i64, i64),
}

impl StepRecord for DdaStep {
    const COLUMNS: &'static [&'static str] = &["K", "X", "Y", "(rX, rY)"];

    fn plot_point(&self) -> Point {
        Point::new(self.x, self.y).rounded()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.k.to_string(),
            format_number(self.x),
            format_number(self.y),
            format!("({}, {})", self.rounded.0, self.rounded.1),
        ]
    }
}

/// Steps along the dominant axis, moving the other axis by a proportional
/// fraction of a pixel each time.
#[derive(Debug, Clone, Copy, Default)]
pub struct DdaStepper;

impl DdaStepper {
    fn steps(from: Point, to: Point) -> f64 {
        (to.x - from.x).abs().max((to.y - from.y).abs())
    }
}

impl Stepper for DdaStepper {
    type Record = DdaStep;

    fn generate(&self, from: Point, to: Point) -> Vec<DdaStep> {
        let steps = Self::steps(from, to);
        if steps == 0.0 {
            return Vec::new();
        }

        let x_inc = (to.x - from.x) / steps;
        let y_inc = (to.y - from.y) / steps;

        let mut rows = Vec::new();
        let (mut x, mut y) = (from.x, from.y);
        let mut k = 0usize;
        while k as f64 <= steps {
            rows.push(DdaStep {
                k,
                x,
                y,
                rounded: (round_half_up(x) as i64, round_half_up(y) as i64),
            });
            k += 1;
            x += x_inc;
            y += y_inc;
        }
        rows
    }

    fn record_count(&self, from: Point, to: Point) -> f64 {
        let steps = Self::steps(from, to);
        if steps == 0.0 {
            return 0.0;
        }
        steps.floor() + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<DdaStep> {
        DdaStepper.generate(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_diagonal_table() {
        let rows = generate(0.0, 0.0, 3.0, 3.0);
        assert_eq!(rows.len(), 4);
        for (k, row) in rows.iter().enumerate() {
            let v = k as f64;
            assert_eq!(row.k, k);
            assert_eq!((row.x, row.y), (v, v));
            assert_eq!(row.rounded, (k as i64, k as i64));
        }
    }

    #[test]
    fn test_record_count_and_endpoints() {
        for &(x1, y1, x2, y2) in &[
            (0.0, 0.0, 8.0, 3.0),
            (2.0, 7.0, -4.0, 1.0),
            (-3.0, -3.0, -1.0, 9.0),
            (1.0, 1.0, 1.0, 6.0),
            (0.0, 5.0, 10.0, 5.0),
        ] {
            let rows = generate(x1, y1, x2, y2);
            let steps = (x2 - x1).abs().max((y2 - y1).abs());
            assert_eq!(rows.len(), steps as usize + 1);

            let first = rows.first().unwrap();
            let last = rows.last().unwrap();
            assert_eq!(
                first.rounded,
                (round_half_up(x1) as i64, round_half_up(y1) as i64)
            );
            assert_eq!(
                last.rounded,
                (round_half_up(x2) as i64, round_half_up(y2) as i64)
            );
        }
    }

    #[test]
    fn test_identical_points_are_empty() {
        assert!(generate(4.0, 4.0, 4.0, 4.0).is_empty());
        assert!(generate(0.0, 0.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn test_fractional_increment_rounds_each_step() {
        // steps = 4 along X, y moves by 0.5 per step
        let rows = generate(0.0, 0.0, 4.0, 2.0);
        let rounded: Vec<_> = rows.iter().map(|r| r.rounded).collect();
        assert_eq!(rounded, vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_negative_half_rounds_up() {
        let rows = generate(0.0, 0.0, -4.0, -2.0);
        assert_eq!(rows[1].y, -0.5);
        assert_eq!(rows[1].rounded, (-1, 0));
    }

    #[test]
    fn test_cells_format_rounded_pair() {
        let rows = generate(0.0, 0.0, 4.0, 2.0);
        assert_eq!(rows[1].cells(), vec!["1", "1", "0.5", "(1, 1)"]);
    }

    #[test]
    fn test_record_count_matches_generate() {
        let from = Point::new(0.0, 0.0);
        let to = Point::new(2.5, 1.0);
        let rows = DdaStepper.generate(from, to);
        assert_eq!(rows.len(), 3);
        assert_eq!(DdaStepper.record_count(from, to), rows.len() as f64);
    }
}
