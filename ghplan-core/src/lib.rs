//! Core pipeline for ghplan: turn a text string into a GitHub-style
//! contribution calendar.
//!
//! The pipeline is a chain of pure steps, each usable on its own:
//! - `raster`: text → grayscale coverage bitmap
//! - `grid`: bitmap → 7×N intensity grid
//! - `calendar`: grid + year → dated contribution days
//! - `ics` / `render`: export as an iCalendar file or a heatmap image

pub mod calendar;
pub mod error;
pub mod grid;
pub mod ics;
pub mod raster;
pub mod render;

pub use calendar::{grid_start, weeks_in_grid, ContributionCalendar};
pub use error::{PlanError, PlanResult};
pub use grid::{Grid, Mode, GRID_ROWS, MAX_LEVEL};
