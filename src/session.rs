//! Generate/clear state machine.
//!
//! A [`Session`] holds everything a generate request depends on: the selected
//! mode, the raw endpoint text and the last generated table. Transitions are
//! pure; [`Session::apply`] consumes the old state and returns the new one.

use std::fmt;

use crate::error::{LinestepError, Result};
use crate::geometry::Point;
use crate::stepper::{Mode, Sequence};

/// One of the four endpoint inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Start X.
    X1,
    /// Start Y.
    Y1,
    /// End X.
    X2,
    /// End Y.
    Y2,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::X1, Field::Y1, Field::X2, Field::Y2];

    /// Get the next field in form order, wrapping.
    pub fn next(self) -> Self {
        match self {
            Field::X1 => Field::Y1,
            Field::Y1 => Field::X2,
            Field::X2 => Field::Y2,
            Field::Y2 => Field::X1,
        }
    }

    /// Get the previous field in form order, wrapping.
    pub fn prev(self) -> Self {
        match self {
            Field::X1 => Field::Y2,
            Field::Y1 => Field::X1,
            Field::X2 => Field::Y1,
            Field::Y2 => Field::X2,
        }
    }

    /// Get the field label.
    pub fn label(self) -> &'static str {
        match self {
            Field::X1 => "X1",
            Field::Y1 => "Y1",
            Field::X2 => "X2",
            Field::Y2 => "Y2",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw endpoint text as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    /// Start X.
    pub x1: String,
    /// Start Y.
    pub y1: String,
    /// End X.
    pub x2: String,
    /// End Y.
    pub y2: String,
}

impl Inputs {
    /// Build inputs from four strings.
    pub fn new(
        x1: impl Into<String>,
        y1: impl Into<String>,
        x2: impl Into<String>,
        y2: impl Into<String>,
    ) -> Self {
        Self {
            x1: x1.into(),
            y1: y1.into(),
            x2: x2.into(),
            y2: y2.into(),
        }
    }

    /// Text of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::X1 => &self.x1,
            Field::Y1 => &self.y1,
            Field::X2 => &self.x2,
            Field::Y2 => &self.y2,
        }
    }

    /// Mutable text of one field.
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::X1 => &mut self.x1,
            Field::Y1 => &mut self.y1,
            Field::X2 => &mut self.x2,
            Field::Y2 => &mut self.y2,
        }
    }

    /// Parse all four fields into the two endpoints.
    pub fn parse(&self) -> Result<(Point, Point)> {
        let x1 = parse_field(Field::X1, &self.x1)?;
        let y1 = parse_field(Field::Y1, &self.y1)?;
        let x2 = parse_field(Field::X2, &self.x2)?;
        let y2 = parse_field(Field::Y2, &self.y2)?;
        Ok((Point::new(x1, y1), Point::new(x2, y2)))
    }
}

fn parse_field(field: Field, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LinestepError::invalid_input(field, text))
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Nothing generated yet, or cleared.
    Idle,
    /// The last generate request produced a table.
    Rendered,
    /// The last generate request was rejected; the table is empty.
    Invalid(Rejection),
}

/// Why a generate request produced nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// A field did not hold a finite number.
    InvalidInput(Field),
    /// Vertical line for the basic stepper, or a zero-length segment.
    DegenerateGeometry,
    /// The table would exceed the configured step limit.
    TooManySteps,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::InvalidInput(field) => write!(f, "{} is not a number", field),
            Rejection::DegenerateGeometry => {
                f.write_str("Vertical or zero-length line: nothing to step")
            },
            Rejection::TooManySteps => f.write_str("Too many steps"),
        }
    }
}

/// A user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Run the selected stepper on the current inputs.
    Generate,
    /// Reset inputs, table and surface.
    Clear,
    /// Select a stepper for the next generate request.
    SetMode(Mode),
    /// Replace the text of one field.
    SetInput(Field, String),
}

/// State of the visualizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Stepper used by the next generate request.
    pub mode: Mode,
    /// Endpoint text.
    pub inputs: Inputs,
    /// Last generated table.
    pub sequence: Sequence,
    /// Lifecycle phase.
    pub phase: Phase,
    /// Record limit for a single request.
    pub max_steps: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Mode::default(), 10_000)
    }
}

impl Session {
    /// Create an idle session.
    pub fn new(mode: Mode, max_steps: usize) -> Self {
        Self {
            mode,
            inputs: Inputs::default(),
            sequence: Sequence::empty(Mode::Basic),
            phase: Phase::Idle,
            max_steps,
        }
    }

    /// Apply one action.
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::Generate => self.generate(),
            Action::Clear => self.clear(),
            Action::SetMode(mode) => Self { mode, ..self },
            Action::SetInput(field, text) => {
                let mut inputs = self.inputs;
                *inputs.get_mut(field) = text;
                Self { inputs, ..self }
            },
        }
    }

    fn generate(self) -> Self {
        let (from, to) = match self.inputs.parse() {
            Ok(endpoints) => endpoints,
            Err(e) => {
                tracing::warn!("Generate rejected: {}", e);
                let field = match e {
                    LinestepError::InvalidInput { field, .. } => field,
                    _ => Field::X1,
                };
                // The table keeps its previous columns.
                let sequence = Sequence::empty(self.sequence.mode());
                return Self {
                    sequence,
                    phase: Phase::Invalid(Rejection::InvalidInput(field)),
                    ..self
                };
            },
        };

        let count = Sequence::record_count(self.mode, from, to);
        if count > self.max_steps as f64 {
            tracing::warn!(
                "Generate rejected: {}",
                LinestepError::too_many_steps(count, self.max_steps)
            );
            return Self {
                sequence: Sequence::empty(self.mode),
                phase: Phase::Invalid(Rejection::TooManySteps),
                ..self
            };
        }

        let sequence = Sequence::generate(self.mode, from, to);
        let phase = if sequence.is_empty() {
            Phase::Invalid(Rejection::DegenerateGeometry)
        } else {
            Phase::Rendered
        };
        tracing::info!(mode = self.mode.name(), records = sequence.len(), "Generated");
        Self {
            sequence,
            phase,
            ..self
        }
    }

    fn clear(self) -> Self {
        tracing::info!("Cleared");
        Self {
            inputs: Inputs::default(),
            sequence: Sequence::empty(self.sequence.mode()),
            phase: Phase::Idle,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_inputs(mode: Mode, x1: &str, y1: &str, x2: &str, y2: &str) -> Session {
        Session {
            inputs: Inputs::new(x1, y1, x2, y2),
            ..Session::new(mode, 10_000)
        }
    }

    #[test]
    fn test_generate_basic() {
        let s = with_inputs(Mode::Basic, "0", "0", "3", "3").apply(Action::Generate);
        assert_eq!(s.phase, Phase::Rendered);
        assert_eq!(s.sequence.mode(), Mode::Basic);
        assert_eq!(s.sequence.len(), 4);
    }

    #[test]
    fn test_invalid_input_clears_and_keeps_columns() {
        let s = with_inputs(Mode::Dda, "0", "0", "3", "3").apply(Action::Generate);
        assert_eq!(s.sequence.mode(), Mode::Dda);

        let s = s
            .apply(Action::SetMode(Mode::Basic))
            .apply(Action::SetInput(Field::Y2, "abc".to_string()))
            .apply(Action::Generate);
        assert!(s.sequence.is_empty());
        assert_eq!(s.sequence.mode(), Mode::Dda);
        assert_eq!(s.phase, Phase::Invalid(Rejection::InvalidInput(Field::Y2)));
    }

    #[test]
    fn test_empty_and_non_finite_inputs_are_invalid() {
        for bad in ["", "   ", "inf", "NaN", "1,5", "0x10"] {
            let s = with_inputs(Mode::Basic, bad, "0", "3", "3").apply(Action::Generate);
            assert_eq!(
                s.phase,
                Phase::Invalid(Rejection::InvalidInput(Field::X1)),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let s = with_inputs(Mode::Dda, " 1 ", "-2", "1e1", "+4").apply(Action::Generate);
        assert_eq!(s.phase, Phase::Rendered);
    }

    #[test]
    fn test_degenerate_geometry() {
        let s = with_inputs(Mode::Basic, "2", "0", "2", "9").apply(Action::Generate);
        assert_eq!(s.phase, Phase::Invalid(Rejection::DegenerateGeometry));
        assert!(s.sequence.is_empty());

        let s = with_inputs(Mode::Dda, "2", "2", "2", "2").apply(Action::Generate);
        assert_eq!(s.phase, Phase::Invalid(Rejection::DegenerateGeometry));
    }

    #[test]
    fn test_mode_change_does_not_recompute() {
        let s = with_inputs(Mode::Basic, "0", "0", "4", "2").apply(Action::Generate);
        let before = s.sequence.clone();
        let s = s.apply(Action::SetMode(Mode::Dda));
        assert_eq!(s.mode, Mode::Dda);
        assert_eq!(s.sequence, before);
        assert_eq!(s.phase, Phase::Rendered);

        let s = s.apply(Action::Generate);
        assert_eq!(s.sequence.mode(), Mode::Dda);
        assert_eq!(s.sequence.len(), 5);
    }

    #[test]
    fn test_clear_resets_everything() {
        let s = with_inputs(Mode::Dda, "0", "0", "3", "1")
            .apply(Action::Generate)
            .apply(Action::Clear);
        assert_eq!(s.inputs, Inputs::default());
        assert!(s.sequence.is_empty());
        assert_eq!(s.phase, Phase::Idle);
        assert_eq!(s.mode, Mode::Dda);
    }

    #[test]
    fn test_step_limit() {
        let s = Session {
            inputs: Inputs::new("0", "0", "50", "0"),
            ..Session::new(Mode::Dda, 10)
        }
        .apply(Action::Generate);
        assert_eq!(s.phase, Phase::Invalid(Rejection::TooManySteps));
        assert!(s.sequence.is_empty());
    }

    #[test]
    fn test_huge_basic_coordinates() {
        let s = with_inputs(Mode::Basic, "1e16", "0", "10000000000000002", "4")
            .apply(Action::Generate);
        assert_eq!(s.phase, Phase::Rendered);
        assert_eq!(s.sequence.len(), 3);
    }

    #[test]
    fn test_field_cycle() {
        let mut f = Field::X1;
        for _ in 0..4 {
            f = f.next();
        }
        assert_eq!(f, Field::X1);
        assert_eq!(Field::X1.prev(), Field::Y2);
    }
}
