use std::path::Path;

/// Output file names follow this order, one cell per letter in row-major order.
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, thiserror::Error)]
pub enum SliceError {
    #[error("image decoder not installed for this format: {0}")]
    DecoderUnavailable(#[source] image::ImageError),
    #[error("failed to read source image: {0}")]
    SourceUnreadable(#[source] image::ImageError),
    #[error("{0}")]
    IoFailure(#[from] std::io::Error),
    #[error("a {rows}x{cols} grid has fewer than 26 cells")]
    GridTooSmall { rows: u32, cols: u32 },
}

/// Row/column layout of the glyph grid. The default 5x6 matches the usual
/// layout of alphabet charts, but that's a guess about the asset rather than
/// anything this tool verifies, so it stays adjustable.
#[derive(Clone, Copy, Debug)]
pub struct GridSpec {
    rows: u32,
    cols: u32,
}

impl GridSpec {
    pub fn new(rows: u32, cols: u32) -> Result<Self, SliceError> {
        match rows.checked_mul(cols) {
            Some(cells) if cells >= LETTERS.len() as u32 => {}
            _ => return Err(SliceError::GridTooSmall { rows, cols }),
        }

        Ok(Self { rows, cols })
    }

    /// Cell dimensions for an image of the given size. Truncating division:
    /// remainder pixels at the right and bottom edges are discarded.
    pub fn cell_size(&self, width: u32, height: u32) -> (u32, u32) {
        (width / self.cols, height / self.rows)
    }

    /// (row, col) of the cell holding letter `index`, column varying fastest.
    pub fn cell(&self, index: u32) -> (u32, u32) {
        (index / self.cols, index % self.cols)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { rows: 5, cols: 6 }
    }
}

/// Crops one cell per letter out of the image at `image_path` and writes it
/// as `<output_dir>/<letter>.png`, creating `output_dir` if needed.
/// `progress` is called after each letter is written.
///
/// There is no rollback: a failure partway through leaves the letters saved
/// so far on disk.
pub fn slice(
    image_path: &Path,
    output_dir: &Path,
    grid: GridSpec,
    mut progress: impl FnMut(char),
) -> Result<(), SliceError> {
    std::fs::create_dir_all(output_dir)?;

    let img = image::open(image_path).map_err(|err| match err {
        image::ImageError::Unsupported(_) => SliceError::DecoderUnavailable(err),
        _ => SliceError::SourceUnreadable(err),
    })?;

    let (cell_width, cell_height) = grid.cell_size(img.width(), img.height());

    for (index, letter) in LETTERS.chars().enumerate() {
        let (row, col) = grid.cell(index as u32);

        let cell = img.crop_imm(
            col * cell_width,
            row * cell_height,
            cell_width,
            cell_height,
        );

        let path = output_dir.join(format!("{}.png", letter));

        cell.save_with_format(&path, image::ImageFormat::Png)
            .map_err(|err| match err {
                image::ImageError::IoError(err) => SliceError::IoFailure(err),
                other => SliceError::IoFailure(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    other,
                )),
            })?;

        progress(letter);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_row_major() {
        let grid = GridSpec::default();

        // G is the 7th letter, first cell of the second row.
        assert_eq!(grid.cell(6), (1, 0));
        assert_eq!(grid.cell(25), (4, 1));
        assert_eq!(grid.cell(0), (0, 0));
    }

    #[test]
    fn cell_size_truncates() {
        let grid = GridSpec::default();

        assert_eq!(grid.cell_size(600, 500), (100, 100));
        assert_eq!(grid.cell_size(601, 500), (100, 100));
        assert_eq!(grid.cell_size(605, 504), (100, 100));
    }

    #[test]
    fn grid_must_hold_every_letter() {
        assert!(matches!(
            GridSpec::new(5, 5),
            Err(SliceError::GridTooSmall { rows: 5, cols: 5 })
        ));
        assert!(GridSpec::new(5, 6).is_ok());
        assert!(GridSpec::new(2, 13).is_ok());
    }

    #[test]
    fn oversized_grid_is_rejected_without_overflow() {
        assert!(matches!(
            GridSpec::new(u32::MAX, u32::MAX),
            Err(SliceError::GridTooSmall { .. })
        ));
    }
}
