//! Line rasterization steppers.
//!
//! Each stepper turns two endpoints into an ordered step table. The record
//! type of a stepper knows which of its fields is the plotted pixel and how
//! it is laid out as a table row, so callers never have to guess from the
//! shape of a record.

mod basic;
mod dda;

pub use basic::{BasicLineStepper, BasicStep};
pub use dda::{DdaStep, DdaStepper};

use crate::geometry::Point;

/// One row of a step table.
pub trait StepRecord {
    /// Column headers, in the order [`StepRecord::cells`] produces them.
    const COLUMNS: &'static [&'static str];

    /// The pixel this record contributes to the plot, rounded to the grid.
    fn plot_point(&self) -> Point;

    /// Display cells for the result table; absent fields are empty strings.
    fn cells(&self) -> Vec<String>;
}

/// A line rasterization algorithm.
pub trait Stepper {
    /// Record type emitted per iteration.
    type Record: StepRecord;

    /// Produce the full step table from `from` to `to`.
    ///
    /// Degenerate input yields an empty table rather than an error.
    fn generate(&self, from: Point, to: Point) -> Vec<Self::Record>;

    /// Number of records [`Stepper::generate`] would emit, without running it.
    fn record_count(&self, from: Point, to: Point) -> f64;
}

/// Which stepper drives a generate request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// Slope-increment stepping along X.
    #[default]
    Basic,
    /// Digital Differential Analyzer.
    Dda,
}

impl Mode {
    /// Get the other mode.
    pub fn next(self) -> Self {
        match self {
            Mode::Basic => Mode::Dda,
            Mode::Dda => Mode::Basic,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Basic => "Basic",
            Mode::Dda => "DDA",
        }
    }
}

/// A generated step table, tagged with the algorithm that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Sequence {
    /// Records of the slope-increment stepper.
    Basic(Vec<BasicStep>),
    /// Records of the DDA stepper.
    Dda(Vec<DdaStep>),
}

impl Default for Sequence {
    fn default() -> Self {
        Self::empty(Mode::default())
    }
}

impl Sequence {
    /// An empty table with the columns of `mode`.
    pub fn empty(mode: Mode) -> Self {
        match mode {
            Mode::Basic => Sequence::Basic(Vec::new()),
            Mode::Dda => Sequence::Dda(Vec::new()),
        }
    }

    /// Run the stepper for `mode`.
    pub fn generate(mode: Mode, from: Point, to: Point) -> Self {
        let sequence = match mode {
            Mode::Basic => Sequence::Basic(BasicLineStepper.generate(from, to)),
            Mode::Dda => Sequence::Dda(DdaStepper.generate(from, to)),
        };
        tracing::debug!(
            mode = mode.name(),
            records = sequence.len(),
            "Generated step table"
        );
        sequence
    }

    /// Records `mode` would produce for this segment.
    pub fn record_count(mode: Mode, from: Point, to: Point) -> f64 {
        match mode {
            Mode::Basic => BasicLineStepper.record_count(from, to),
            Mode::Dda => DdaStepper.record_count(from, to),
        }
    }

    /// The algorithm these records came from.
    pub fn mode(&self) -> Mode {
        match self {
            Sequence::Basic(_) => Mode::Basic,
            Sequence::Dda(_) => Mode::Dda,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        match self {
            Sequence::Basic(rows) => rows.len(),
            Sequence::Dda(rows) => rows.len(),
        }
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column headers for this record kind.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Sequence::Basic(_) => BasicStep::COLUMNS,
            Sequence::Dda(_) => DdaStep::COLUMNS,
        }
    }

    /// Table rows in generation order.
    pub fn rows(&self) -> Vec<Vec<String>> {
        match self {
            Sequence::Basic(rows) => rows.iter().map(StepRecord::cells).collect(),
            Sequence::Dda(rows) => rows.iter().map(StepRecord::cells).collect(),
        }
    }

    /// Plotted pixels in generation order.
    pub fn plot_points(&self) -> Vec<Point> {
        match self {
            Sequence::Basic(rows) => rows.iter().map(StepRecord::plot_point).collect(),
            Sequence::Dda(rows) => rows.iter().map(StepRecord::plot_point).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_keeps_columns() {
        assert_eq!(Sequence::empty(Mode::Basic).columns().len(), 6);
        assert_eq!(Sequence::empty(Mode::Dda).columns().len(), 4);
        assert!(Sequence::default().is_empty());
    }

    #[test]
    fn test_generate_dispatches_by_mode() {
        let from = Point::new(0.0, 0.0);
        let to = Point::new(3.0, 3.0);
        let basic = Sequence::generate(Mode::Basic, from, to);
        let dda = Sequence::generate(Mode::Dda, from, to);
        assert_eq!(basic.mode(), Mode::Basic);
        assert_eq!(dda.mode(), Mode::Dda);
        assert_eq!(basic.len(), 4);
        assert_eq!(dda.len(), 4);
        assert_eq!(basic.rows().len(), basic.plot_points().len());
    }

    #[test]
    fn test_plot_points_keep_zero_coordinates() {
        // A record at x = 0 must plot at 0, not fall through to another field.
        let seq = Sequence::generate(Mode::Dda, Point::new(0.0, 2.0), Point::new(0.0, 0.0));
        let pts = seq.plot_points();
        assert_eq!(pts.first(), Some(&Point::new(0.0, 2.0)));
        assert_eq!(pts.last(), Some(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_mode_cycle() {
        assert_eq!(Mode::Basic.next(), Mode::Dda);
        assert_eq!(Mode::Dda.next().name(), "Basic");
    }
}
