use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_grid::PixelGrid;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, grid: &PixelGrid, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();
        let mut file = BufWriter::new(File::create(filepath)?);

        write_ppm(&mut file, grid)?;
        file.flush()?;

        debug!("Wrote {}x{} PPM to {}", grid.size(), grid.size(), filepath.display());
        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

/// Binary PPM: `P6`, the dimensions, the max channel value, then raw RGB.
pub fn write_ppm<W: Write>(out: &mut W, grid: &PixelGrid) -> std::io::Result<()> {
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", grid.size(), grid.size())?;
    writeln!(out, "255")?;
    out.write_all(grid.bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_grid::render_grid::render_grid;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
    use crate::core::fractals::mandelbrot::colour_map::TwoToneColourMap;

    fn sample_grid(size: u32) -> PixelGrid {
        let algorithm = MandelbrotAlgorithm::new(Viewport::DEFAULT, 20);
        render_grid(size, &algorithm, &TwoToneColourMap::default()).unwrap()
    }

    #[test]
    fn test_write_ppm_header_and_payload() {
        let grid = sample_grid(4);
        let mut out = Vec::new();

        write_ppm(&mut out, &grid).unwrap();

        let header = b"P6\n4 4\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(&out[header.len()..], grid.bytes());
        assert_eq!(out.len(), header.len() + 4 * 4 * 3);
    }

    #[test]
    fn test_present_writes_file() {
        let grid = sample_grid(8);
        let path = std::env::temp_dir().join(format!(
            "mandelbrot_zoom_ppm_test_{}.ppm",
            std::process::id()
        ));

        PpmFilePresenter::new().present(&grid, &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(written.starts_with(b"P6\n8 8\n255\n"));
        assert!(written.ends_with(grid.bytes()));
    }

    #[test]
    fn test_present_to_missing_directory_fails() {
        let grid = sample_grid(2);
        let path = std::env::temp_dir()
            .join("mandelbrot_zoom_missing_dir_for_test")
            .join("out.ppm");

        assert!(PpmFilePresenter::new().present(&grid, path).is_err());
    }
}
