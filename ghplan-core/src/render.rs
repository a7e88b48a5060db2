//! Heatmap rendering of a grid, matching GitHub's visual convention.

use crate::grid::{Grid, GRID_ROWS};
use image::{Rgb, RgbImage};

/// GitHub's contribution palette: empty, then four deepening greens.
pub const PALETTE: [Rgb<u8>; 5] = [
    Rgb([0xeb, 0xed, 0xf0]),
    Rgb([0x9b, 0xe9, 0xa8]),
    Rgb([0x40, 0xc4, 0x63]),
    Rgb([0x30, 0xa1, 0x4e]),
    Rgb([0x21, 0x6e, 0x39]),
];

/// Render the grid as a heatmap: one `cell_size` square per cell with
/// `padding` pixels of gutter between cells.
pub fn render_image(grid: &Grid, cell_size: u32, padding: u32) -> RgbImage {
    let step = cell_size + padding;
    let width = step * grid.columns() - padding;
    let height = step * GRID_ROWS - padding;

    let mut image = RgbImage::from_pixel(width, height, PALETTE[0]);

    for (row, col, level) in grid.active_cells() {
        let color = PALETTE[level as usize];
        let x0 = col * step;
        let y0 = row * step;
        for y in y0..y0 + cell_size {
            for x in x0..x0 + cell_size {
                image.put_pixel(x, y, color);
            }
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_dimensions_follow_grid_shape() {
        let grid = Grid::from_levels(3, vec![0u8; (3 * GRID_ROWS) as usize]);
        let image = render_image(&grid, 20, 2);

        assert_eq!(image.width(), 3 * 22 - 2);
        assert_eq!(image.height(), 7 * 22 - 2);
    }

    #[test]
    fn test_single_active_cell_shades_one_square() {
        let mut cells = vec![0u8; (3 * GRID_ROWS) as usize];
        cells[(1 * 3 + 2) as usize] = 1; // row 1, col 2
        let grid = Grid::from_levels(3, cells);

        let image = render_image(&grid, 2, 1);

        // The active cell's top-left corner.
        assert_eq!(*image.get_pixel(2 * 3, 1 * 3), PALETTE[1]);
        // An empty cell stays on the background color.
        assert_eq!(*image.get_pixel(0, 0), PALETTE[0]);

        let shaded = image
            .pixels()
            .filter(|p| **p != PALETTE[0])
            .count();
        assert_eq!(shaded, 4, "exactly one 2x2 square should be shaded");
    }

    #[test]
    fn test_levels_pick_deepening_greens() {
        let mut cells = vec![0u8; (4 * GRID_ROWS) as usize];
        for col in 0..4 {
            cells[col as usize] = col as u8 + 1; // row 0, levels 1..=4
        }
        let grid = Grid::from_levels(4, cells);

        let image = render_image(&grid, 1, 0);
        for col in 0..4u32 {
            assert_eq!(*image.get_pixel(col, 0), PALETTE[col as usize + 1]);
        }
    }
}
