//! The contribution grid: 7 weekday rows by N week columns of intensity levels.

use crate::error::{PlanError, PlanResult};
use image::imageops::{self, FilterType};
use image::GrayImage;

/// Rows in a GitHub contribution grid, one per weekday (Sunday first).
pub const GRID_ROWS: u32 = 7;

/// GitHub shades non-empty days into four buckets, so levels run 0..=4.
pub const MAX_LEVEL: u8 = 4;

/// Quantization policy for grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// On/off cells: every inked pixel becomes level 1.
    Plain,
    /// Grayscale coverage maps onto the full 0..=4 level range.
    CommitLevel,
}

impl Mode {
    fn max_level(self) -> u8 {
        match self {
            Mode::Plain => 1,
            Mode::CommitLevel => MAX_LEVEL,
        }
    }
}

/// A 7×N matrix of intensity levels, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: u32,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from explicit levels. `cells` is row-major, must hold
    /// exactly `columns * 7` entries, and every level must be 0..=4.
    pub fn from_levels(columns: u32, cells: Vec<u8>) -> Grid {
        assert_eq!(
            cells.len(),
            (columns * GRID_ROWS) as usize,
            "cell count must match grid dimensions"
        );
        assert!(
            cells.iter().all(|&level| level <= MAX_LEVEL),
            "levels must not exceed {}",
            MAX_LEVEL
        );
        Grid { columns, cells }
    }

    /// Downsample a rasterized text bitmap into a grid.
    ///
    /// The bitmap is resized to 7 rows with its aspect ratio preserved, then
    /// each pixel is quantized into the mode's level range by min/max
    /// normalization. A bitmap wider than `max_columns` weeks is rejected
    /// rather than truncated.
    pub fn from_bitmap(bitmap: &GrayImage, mode: Mode, max_columns: u32) -> PlanResult<Grid> {
        let aspect = bitmap.width() as f32 / bitmap.height() as f32;
        let columns = ((GRID_ROWS as f32 * aspect) as u32).max(1);

        if columns > max_columns {
            return Err(PlanError::TextTooLong {
                columns,
                max: max_columns,
            });
        }

        let resized = imageops::resize(bitmap, columns, GRID_ROWS, FilterType::Lanczos3);

        let (min, max) = resized
            .pixels()
            .fold((u8::MAX, u8::MIN), |(lo, hi), p| {
                (lo.min(p.0[0]), hi.max(p.0[0]))
            });

        // A flat bitmap has no pattern to draw.
        if min == max {
            let cells = vec![0u8; (columns * GRID_ROWS) as usize];
            return Ok(Grid { columns, cells });
        }

        let span = (max - min) as f32;
        let max_level = mode.max_level() as f32;
        let mut cells = vec![0u8; (columns * GRID_ROWS) as usize];
        for (x, y, pixel) in resized.enumerate_pixels() {
            let normalized = (pixel.0[0] - min) as f32 / span * max_level;
            cells[(y * columns + x) as usize] = normalized.ceil() as u8;
        }

        Ok(Grid { columns, cells })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Level at (weekday row, week column). Panics when out of range.
    pub fn get(&self, row: u32, col: u32) -> u8 {
        assert!(row < GRID_ROWS && col < self.columns);
        self.cells[(row * self.columns + col) as usize]
    }

    /// Non-zero cells as (row, col, level), column-major so callers walk the
    /// grid week by week.
    pub fn active_cells(&self) -> impl Iterator<Item = (u32, u32, u8)> + '_ {
        (0..self.columns).flat_map(move |col| {
            (0..GRID_ROWS).filter_map(move |row| {
                let level = self.get(row, col);
                (level > 0).then_some((row, col, level))
            })
        })
    }
}
