mod config;
mod font;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use ghplan_core::{calendar, grid::Mode, ics, raster, render, ContributionCalendar, Grid};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plan")]
#[command(about = "Render a text string onto a GitHub-style contribution calendar")]
struct Cli {
    /// Text to draw onto the contribution grid
    text: String,

    /// Target year (defaults to the current year)
    #[arg(short, long)]
    year: Option<i32>,

    /// Path to a TrueType/OpenType font
    #[arg(long)]
    font: Option<PathBuf>,

    /// Quantize into GitHub's four commit-level shades instead of on/off
    #[arg(short, long)]
    commit_level: bool,

    /// Write an iCalendar (.ics) file
    #[arg(short = 'o', long)]
    save_icalendar: bool,

    /// Write a PNG heatmap image
    #[arg(short, long)]
    save_image: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    validate_outputs(cli.save_icalendar, cli.save_image)?;

    let cfg = config::load_config()?;
    let year = cli.year.unwrap_or_else(|| chrono::Local::now().year());

    let font_path = cli
        .font
        .clone()
        .or_else(|| cfg.default_font.as_ref().map(PathBuf::from));
    let font = font::load_font(font_path.as_deref())?;

    let mode = if cli.commit_level {
        Mode::CommitLevel
    } else {
        Mode::Plain
    };

    // Rasterize and quantize onto the year's grid.
    let bitmap = raster::rasterize(&cli.text, &font)?;
    let max_columns = calendar::weeks_in_grid(year)?;
    let grid = Grid::from_bitmap(&bitmap, mode, max_columns)?;
    let calendar = ContributionCalendar::new(year, grid);

    println!(
        "📅 \"{}\" → {} week columns on the {} grid",
        cli.text,
        calendar.grid().columns(),
        year
    );

    // Build every requested artifact in memory before touching the
    // filesystem: a failure must not leave one output behind without the
    // other.
    let ics_content = if cli.save_icalendar {
        let days = calendar.contribution_days()?;
        Some(ics::generate_ics(&days, &cli.text)?)
    } else {
        None
    };

    let heatmap = cli
        .save_image
        .then(|| render::render_image(calendar.grid(), cfg.cell_size, cfg.cell_padding));

    let stem = output_stem(&cli.text, year);

    if let Some(content) = ics_content {
        let path = format!("{}.ics", stem);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write calendar file {}", path))?;
        println!("  Wrote {}", path);
    }

    if let Some(image) = heatmap {
        let path = format!("{}.png", stem);
        image
            .save(&path)
            .with_context(|| format!("Failed to write image file {}", path))?;
        println!("  Wrote {}", path);
    }

    Ok(())
}

/// At least one output mode must be requested before any rendering work
/// starts.
fn validate_outputs(save_icalendar: bool, save_image: bool) -> Result<()> {
    if !save_icalendar && !save_image {
        anyhow::bail!(
            "Nothing to do: pass -o/--save-icalendar and/or -s/--save-image.\n\
            Run `plan --help` for the full usage."
        );
    }
    Ok(())
}

/// Deterministic artifact name from the input text and year.
fn output_stem(text: &str, year: i32) -> String {
    let mut slug = slug::slugify(text);
    if slug.is_empty() {
        slug = "plan".to_string();
    }
    format!("{}-{}", slug, year)
}
