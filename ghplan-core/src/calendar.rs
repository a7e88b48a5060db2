//! Maps grid cells onto concrete dates in a target year.

use crate::error::{PlanError, PlanResult};
use crate::grid::Grid;
use chrono::{Datelike, Duration, NaiveDate};

/// The Sunday on or before January 1 of `year`. This is the date of the
/// grid's top-left cell (column 0, row 0), matching how GitHub pads the
/// first partial week of a year.
pub fn grid_start(year: i32) -> PlanResult<NaiveDate> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(PlanError::InvalidYear(year))?;
    let days_back = jan1.weekday().num_days_from_sunday() as i64;
    Ok(jan1 - Duration::days(days_back))
}

/// Week columns available for `year`: from `grid_start` through the week
/// containing December 31.
pub fn weeks_in_grid(year: i32) -> PlanResult<u32> {
    let start = grid_start(year)?;
    let dec31 = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(PlanError::InvalidYear(year))?;
    Ok(((dec31 - start).num_days() / 7 + 1) as u32)
}

/// A grid pinned to a concrete year.
#[derive(Debug, Clone)]
pub struct ContributionCalendar {
    year: i32,
    grid: Grid,
}

impl ContributionCalendar {
    pub fn new(year: i32, grid: Grid) -> ContributionCalendar {
        ContributionCalendar { year, grid }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// (date, level) for every non-zero cell, ordered week by week. Cell
    /// (row, col) lands on `grid_start + col * 7 + row` days; dates in the
    /// final week may spill past December 31.
    pub fn contribution_days(&self) -> PlanResult<Vec<(NaiveDate, u8)>> {
        let start = grid_start(self.year)?;
        Ok(self
            .grid
            .active_cells()
            .map(|(row, col, level)| {
                (start + Duration::days((col * 7 + row) as i64), level)
            })
            .collect())
    }
}
