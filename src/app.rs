//! Application state and logic.

use crate::clipboard;
use crate::config::{Config, RenderConfig};
use crate::render::{self, Scene};
use crate::session::{Action, Field, Inputs, Phase, Rejection, Session};
use crate::stepper::Mode;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Mode, inputs and the current table.
    pub session: Session,
    /// Scene for the current table.
    pub scene: Scene,
    /// Drawing surface configuration.
    pub render_config: RenderConfig,
    /// Input field receiving keystrokes.
    pub focus: Field,
    /// First visible table row.
    pub table_scroll: usize,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application instance.
    ///
    /// When `inputs` is given the table is generated right away.
    pub fn new(config: Config, inputs: Option<Inputs>) -> Self {
        let mut app = Self {
            session: Session::new(config.mode, config.max_steps),
            scene: Scene::cleared(),
            render_config: config.render,
            focus: Field::X1,
            table_scroll: 0,
            status: "Ready".to_string(),
            theme: config.theme,
        };

        if let Some(inputs) = inputs {
            for field in Field::ALL {
                app.dispatch(Action::SetInput(field, inputs.get(field).to_string()));
            }
            app.generate();
        }

        app
    }

    /// Apply an action to the session and re-render.
    pub fn dispatch(&mut self, action: Action) {
        let session = std::mem::take(&mut self.session);
        self.session = session.apply(action);
        self.scene = render::render(&self.session.sequence, &self.render_config);
    }

    /// Run the selected stepper.
    pub fn generate(&mut self) {
        self.dispatch(Action::Generate);
        self.table_scroll = 0;
        self.status = match &self.session.phase {
            Phase::Rendered => format!(
                "{}: {} steps",
                self.session.sequence.mode().name(),
                self.session.sequence.len()
            ),
            Phase::Invalid(Rejection::TooManySteps) => {
                format!("Too many steps (limit {})", self.session.max_steps)
            },
            Phase::Invalid(rejection) => rejection.to_string(),
            Phase::Idle => "Ready".to_string(),
        };
    }

    /// Reset inputs, table and plot.
    pub fn clear(&mut self) {
        self.dispatch(Action::Clear);
        self.focus = Field::X1;
        self.table_scroll = 0;
        self.status = "Cleared".to_string();
    }

    /// Select the stepper for the next generate request.
    pub fn set_mode(&mut self, mode: Mode) {
        self.dispatch(Action::SetMode(mode));
        self.status = format!("Mode: {} (Enter to generate)", mode.name());
    }

    /// Append a character to the focused field, ignoring non-numeric ones.
    pub fn input_char(&mut self, c: char) {
        if !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')) {
            return;
        }
        let mut text = self.session.inputs.get(self.focus).to_string();
        text.push(c);
        self.dispatch(Action::SetInput(self.focus, text));
    }

    /// Remove the last character of the focused field.
    pub fn backspace(&mut self) {
        let mut text = self.session.inputs.get(self.focus).to_string();
        if text.pop().is_some() {
            self.dispatch(Action::SetInput(self.focus, text));
        }
    }

    /// Focus the next input field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Focus the previous input field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Copy the table to the clipboard.
    pub fn copy_table(&mut self) {
        if self.session.sequence.is_empty() {
            self.status = "Nothing to copy".to_string();
            return;
        }
        match clipboard::copy_table(&self.session.sequence) {
            Ok(()) => self.status = "Table copied!".to_string(),
            Err(e) => {
                tracing::error!("Copy failed: {}", e);
                self.status = format!("Copy failed: {}", e);
            },
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Scroll the table up.
    pub fn scroll_up(&mut self, amount: usize) {
        self.table_scroll = self.table_scroll.saturating_sub(amount);
    }

    /// Scroll the table down.
    pub fn scroll_down(&mut self, amount: usize) {
        let last = self.session.sequence.len().saturating_sub(1);
        self.table_scroll = (self.table_scroll + amount).min(last);
    }
}
