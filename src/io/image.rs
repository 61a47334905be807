//! PNG export of a board, one coloured square per cell

use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::io::configuration::{
    BOARD_BACKGROUND_COLOR, EMPTY_CELL_COLOR, SUPER_TILE_COLOR, TILE_PALETTE,
};
use crate::io::error::{GameError, Result, WithPath};
use crate::spatial::{Grid, Position};

// Palette entry for a cell: empty, a palette level, or beyond the palette
fn cell_color(grid: &Grid, position: Position) -> [u8; 4] {
    grid.cell_content(position)
        .map_or(EMPTY_CELL_COLOR, |tile| {
            (tile.level() as usize)
                .checked_sub(1)
                .and_then(|index| TILE_PALETTE.get(index))
                .copied()
                .unwrap_or(SUPER_TILE_COLOR)
        })
}

/// Draw the board into an image
///
/// Cells are `cell_pixels` wide and separated (and framed) by `gap_pixels`
/// of background colour.
pub fn render_grid(grid: &Grid, cell_pixels: u32, gap_pixels: u32) -> RgbaImage {
    let size = grid.size() as u32;
    let side = size * cell_pixels + (size + 1) * gap_pixels;
    let mut img = RgbaImage::from_pixel(side, side, Rgba(BOARD_BACKGROUND_COLOR));

    for x in 0..grid.size() {
        for y in 0..grid.size() {
            let color = Rgba(cell_color(grid, Position::new(x, y)));
            let left = gap_pixels + x as u32 * (cell_pixels + gap_pixels);
            let top = gap_pixels + y as u32 * (cell_pixels + gap_pixels);

            for pixel_x in left..left + cell_pixels {
                for pixel_y in top..top + cell_pixels {
                    img.put_pixel(pixel_x, pixel_y, color);
                }
            }
        }
    }

    img
}

/// Export the board as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &Grid,
    output_path: &Path,
    cell_pixels: u32,
    gap_pixels: u32,
) -> Result<()> {
    let img = render_grid(grid, cell_pixels, gap_pixels);

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(output_path)
        .map_err(|source| GameError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}
