//! Slope-increment stepper.

use super::{StepRecord, Stepper};
use crate::geometry::Point;
use crate::table::format_number;

/// One row of the slope-increment table.
///
/// The first row of a table is the starting point and carries no step size
/// or slope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicStep {
    /// X at the start of the step.
    pub x1: f64,
    /// Step size along X.
    pub dx: Option<f64>,
    /// X at the end of the step.
    pub x2: f64,
    /// Y at the start of the step.
    pub y1: f64,
    /// Slope of the line.
    pub m: Option<f64>,
    /// Y at the end of the step.
    pub y2: f64,
}

impl StepRecord for BasicStep {
    const COLUMNS: &'static [&'static str] = &["X1", "dX", "X2", "Y(start)", "M", "Y(end)"];

    fn plot_point(&self) -> Point {
        Point::new(self.x1, self.y1).rounded()
    }

    fn cells(&self) -> Vec<String> {
        let opt = |v: Option<f64>| v.map(format_number).unwrap_or_default();
        vec![
            format_number(self.x1),
            opt(self.dx),
            format_number(self.x2),
            format_number(self.y1),
            opt(self.m),
            format_number(self.y2),
        ]
    }
}

/// Steps one unit along X per row and accumulates the slope into Y.
///
/// Vertical lines have no slope, so they produce an empty table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicLineStepper;

impl Stepper for BasicLineStepper {
    type Record = BasicStep;

    fn generate(&self, from: Point, to: Point) -> Vec<BasicStep> {
        let (x1, y1, x2, y2) = (from.x, from.y, to.x, to.y);
        if x1 == x2 {
            return Vec::new();
        }

        let m = (y2 - y1) / (x2 - x1);
        let mut rows = vec![BasicStep {
            x1,
            dx: None,
            x2: x1,
            y1,
            m: None,
            y2: y1,
        }];

        let dir = if x1 < x2 { 1.0 } else { -1.0 };

        // Counted rather than compared against x2: `i + 1.0 == i` past 2^53.
        let steps = (x2 - x1).abs().ceil() as u64;
        rows.extend((0..steps).map(|n| {
            let n = n as f64;
            let (i, j) = (x1 + dir * n, y1 + dir * m * n);
            BasicStep {
                x1: i,
                dx: Some(1.0),
                x2: i + dir,
                y1: j,
                m: Some(m),
                y2: j + dir * m,
            }
        }));
        rows
    }

    fn record_count(&self, from: Point, to: Point) -> f64 {
        if from.x == to.x {
            return 0.0;
        }
        (to.x - from.x).abs().ceil() + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<BasicStep> {
        BasicLineStepper.generate(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_diagonal_table() {
        let rows = generate(0.0, 0.0, 3.0, 3.0);
        assert_eq!(rows.len(), 4);

        let first = rows[0];
        assert_eq!((first.x1, first.x2, first.y1, first.y2), (0.0, 0.0, 0.0, 0.0));
        assert_eq!(first.dx, None);
        assert_eq!(first.m, None);

        for (n, row) in rows.iter().skip(1).enumerate() {
            let n = n as f64;
            assert_eq!((row.x1, row.x2), (n, n + 1.0));
            assert_eq!((row.y1, row.y2), (n, n + 1.0));
            assert_eq!(row.m, Some(1.0));
            assert_eq!(row.dx, Some(1.0));
        }
    }

    #[test]
    fn test_endpoints_for_integer_deltas() {
        for &(x1, y1, x2, y2) in &[
            (0.0, 0.0, 5.0, 2.0),
            (4.0, -1.0, -3.0, 6.0),
            (-2.0, 3.0, 2.0, 3.0),
            (1.5, 0.0, 4.5, 9.0),
        ] {
            let rows = generate(x1, y1, x2, y2);
            let first = rows.first().unwrap();
            assert_eq!((first.x2, first.y1), (x1, y1));
            assert_eq!(rows.last().unwrap().x2, x2);
            assert_eq!(rows.len() as f64, (x2 - x1).abs() + 1.0);
        }
    }

    #[test]
    fn test_vertical_is_empty() {
        assert!(generate(2.0, 0.0, 2.0, 10.0).is_empty());
        assert!(generate(-1.0, 5.0, -1.0, -5.0).is_empty());
        assert!(generate(0.0, 0.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn test_backward_steps() {
        let rows = generate(3.0, 0.0, 0.0, 6.0);
        assert_eq!(rows.len(), 4);
        let step = rows[1];
        assert_eq!((step.x1, step.x2), (3.0, 2.0));
        assert_eq!(step.m, Some(-2.0));
        assert_eq!((step.y1, step.y2), (0.0, 2.0));
        assert_eq!(rows[3].y2, 6.0);
    }

    #[test]
    fn test_horizontal_has_zero_slope() {
        let rows = generate(0.0, 4.0, 2.0, 4.0);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.y1 == 4.0 && r.y2 == 4.0));
        assert_eq!(rows[1].m, Some(0.0));
    }

    #[test]
    fn test_cells_leave_missing_fields_blank() {
        let rows = generate(0.0, 0.0, 2.0, 1.0);
        assert_eq!(rows[0].cells(), vec!["0", "", "0", "0", "", "0"]);
        assert_eq!(rows[1].cells(), vec!["0", "1", "1", "0", "0.5", "0.5"]);
    }

    #[test]
    fn test_plot_point_uses_step_start() {
        let rows = generate(0.0, 0.0, 2.0, 1.0);
        assert_eq!(rows[2].plot_point(), Point::new(1.0, 1.0));
    }

    #[test]
    fn test_record_count_matches_generate() {
        let from = Point::new(-2.0, 1.0);
        let to = Point::new(5.0, -4.0);
        let rows = BasicLineStepper.generate(from, to);
        assert_eq!(BasicLineStepper.record_count(from, to), rows.len() as f64);
    }

    #[test]
    fn test_fractional_delta_overshoots_end() {
        let from = Point::new(0.0, 0.0);
        let to = Point::new(2.5, 1.0);
        let rows = BasicLineStepper.generate(from, to);
        assert_eq!(rows.len(), 4);
        assert_eq!(BasicLineStepper.record_count(from, to), 4.0);

        let starts: Vec<f64> = rows.iter().skip(1).map(|r| r.x1).collect();
        assert_eq!(starts, vec![0.0, 1.0, 2.0]);
        assert_eq!(rows.last().unwrap().x2, 3.0);
        assert_eq!(rows[1].m, Some(0.4));
    }

    #[test]
    fn test_huge_coordinates_terminate() {
        // 1e16 + 1.0 == 1e16, so an accumulated X never reaches the end
        let from = Point::new(1e16, 0.0);
        let to = Point::new(1e16 + 2.0, 4.0);
        let rows = BasicLineStepper.generate(from, to);
        assert_eq!(rows.len(), 3);
        assert_eq!(BasicLineStepper.record_count(from, to), rows.len() as f64);
        assert_eq!(rows[2].y1, 2.0);
    }
}
