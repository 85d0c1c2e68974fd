//! Linestep - a terminal visualizer for line rasterization algorithms.

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use linestep::{
    app::{App, Theme},
    config::{Config, RenderConfig},
    render::{self, svg},
    session::{Action, Field, Inputs, Phase, Session},
    stepper::Mode,
    table, ui,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "linestep")]
#[command(about = "Step a line across the pixel grid with the basic or DDA algorithm", long_about = None)]
struct Args {
    /// Stepper selected at startup
    #[arg(long, value_enum, default_value_t = Mode::Basic)]
    mode: Mode,

    /// Start X
    #[arg(long, allow_hyphen_values = true)]
    x1: Option<String>,

    /// Start Y
    #[arg(long, allow_hyphen_values = true)]
    y1: Option<String>,

    /// End X
    #[arg(long, allow_hyphen_values = true)]
    x2: Option<String>,

    /// End Y
    #[arg(long, allow_hyphen_values = true)]
    y2: Option<String>,

    /// Drawing surface width
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Drawing surface height
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Point marker radius in surface units
    #[arg(long, default_value_t = 4.0)]
    marker_radius: f64,

    /// Smallest plotted extent per axis in world units
    #[arg(long, default_value_t = 1.0)]
    min_extent: f64,

    /// Largest number of table rows a single request may produce
    #[arg(long, default_value_t = 10_000)]
    max_steps: usize,

    /// Color theme
    #[arg(long, value_enum, default_value_t = Theme::GruvboxDark)]
    theme: Theme,

    /// Print the step table and exit
    #[arg(long)]
    print: bool,

    /// Write the plot as SVG to the given file and exit
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Result<Config> {
        let surface = [
            ("--width", self.width),
            ("--height", self.height),
            ("--marker-radius", self.marker_radius),
            ("--min-extent", self.min_extent),
        ];
        for (flag, value) in surface {
            if !(value.is_finite() && value > 0.0) {
                bail!("{} must be a positive number, got {}", flag, value);
            }
        }

        Ok(Config {
            render: RenderConfig {
                width: self.width,
                height: self.height,
                marker_radius: self.marker_radius,
                min_extent: self.min_extent,
            },
            mode: self.mode,
            max_steps: self.max_steps,
            theme: self.theme,
        })
    }

    fn inputs(&self) -> Option<Inputs> {
        let fields = [&self.x1, &self.y1, &self.x2, &self.y2];
        if fields.iter().all(|f| f.is_none()) {
            return None;
        }
        let [x1, y1, x2, y2] = fields.map(|f| f.clone().unwrap_or_default());
        Some(Inputs::new(x1, y1, x2, y2))
    }

    fn headless(&self) -> bool {
        self.print || self.svg.is_some()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Linestep");
    }

    let config = args.config()?;

    if args.headless() {
        return run_headless(&args, config);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(config, args.inputs());
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("Linestep exited");

    Ok(())
}

/// Generate once from the command line inputs and write the requested outputs.
fn run_headless(args: &Args, config: Config) -> Result<()> {
    let inputs = args.inputs().unwrap_or_default();

    let mut session = Session::new(config.mode, config.max_steps);
    for field in Field::ALL {
        session = session.apply(Action::SetInput(field, inputs.get(field).to_string()));
    }
    let session = session.apply(Action::Generate);

    if let Phase::Invalid(rejection) = &session.phase {
        eprintln!("{}", rejection);
    }

    if args.print {
        print!("{}", table::to_text(&session.sequence));
    }

    if let Some(path) = &args.svg {
        let scene = render::render(&session.sequence, &config.render);
        std::fs::write(path, svg::to_svg(&scene, &config.render))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Wrote {}", path.display());
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Esc)
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

                    // Actions
                    (KeyModifiers::NONE, KeyCode::Enter) => app.generate(),
                    (KeyModifiers::CONTROL, KeyCode::Char('l')) => app.clear(),
                    (KeyModifiers::CONTROL, KeyCode::Char('b')) => app.set_mode(Mode::Basic),
                    (KeyModifiers::CONTROL, KeyCode::Char('d')) => app.set_mode(Mode::Dda),

                    // Field focus
                    (KeyModifiers::NONE, KeyCode::Tab) => app.focus_next(),
                    (_, KeyCode::BackTab) => app.focus_prev(),

                    // Table scrolling
                    (KeyModifiers::NONE, KeyCode::Up) => app.scroll_up(1),
                    (KeyModifiers::NONE, KeyCode::Down) => app.scroll_down(1),
                    (KeyModifiers::NONE, KeyCode::PageUp) => app.scroll_up(10),
                    (KeyModifiers::NONE, KeyCode::PageDown) => app.scroll_down(10),

                    // Features
                    (KeyModifiers::CONTROL, KeyCode::Char('y')) => app.copy_table(),
                    (KeyModifiers::CONTROL, KeyCode::Char('t')) => app.cycle_theme(),

                    // Editing
                    (KeyModifiers::NONE, KeyCode::Backspace) => app.backspace(),
                    (KeyModifiers::NONE, KeyCode::Char(c))
                    | (KeyModifiers::SHIFT, KeyCode::Char(c)) => app.input_char(c),

                    _ => {},
                }
            }
        }
    }
}
