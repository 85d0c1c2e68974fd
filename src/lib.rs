//! Linestep - a terminal visualizer for line rasterization.
//!
//! Linestep steps a line segment across the pixel grid with either the basic
//! slope-increment method or the Digital Differential Analyzer, shows every
//! iteration as a table row and plots the resulting pixels.
//!
//! # Features
//!
//! - Basic and DDA steppers with full step tables
//! - Auto-fitting plot described as a backend-neutral command list
//! - Terminal canvas and SVG backends
//! - Explicit generate/clear state machine
//! - Gruvbox color themes
//! - Clipboard export of the step table
//!
//! # Example
//!
//! ```
//! use linestep::config::RenderConfig;
//! use linestep::geometry::Point;
//! use linestep::render::render;
//! use linestep::stepper::{Mode, Sequence};
//!
//! let table = Sequence::generate(Mode::Dda, Point::new(0.0, 0.0), Point::new(3.0, 3.0));
//! assert_eq!(table.len(), 4);
//!
//! let scene = render(&table, &RenderConfig::default());
//! assert!(!scene.is_blank());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod geometry;
pub mod render;
pub mod session;
pub mod stepper;
pub mod table;
pub mod ui;

pub use error::{LinestepError, Result};
