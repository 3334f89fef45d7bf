//! PNG encoding of rendered grids.
//!
//! One pixel per cell with optional integer upscaling (nearest
//! neighbour, so cells stay crisp).

use std::io::Cursor;
use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};

use crate::error::{Result, WordpxError};
use crate::types::Colour;

/// Encode a cell grid to in-memory PNG bytes.
pub fn encode_png(pixels: &[Vec<Colour>], scale: u32) -> Result<Vec<u8>> {
    let scale = scale.max(1);

    let height = pixels.len() as u32;
    let width = pixels.first().map_or(0, |row| row.len()) as u32;
    if width == 0 || height == 0 {
        return Err(WordpxError::Build {
            message: "cannot encode an empty grid".to_string(),
            help: None,
        });
    }

    let mut img: RgbaImage = ImageBuffer::new(width * scale, height * scale);
    for (y, row) in pixels.iter().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            let rgba = Rgba(colour.to_rgba());
            for sy in 0..scale {
                for sx in 0..scale {
                    img.put_pixel(x as u32 * scale + sx, y as u32 * scale + sy, rgba);
                }
            }
        }
    }

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| WordpxError::Build {
            message: format!("Failed to encode PNG: {}", e),
            help: None,
        })?;
    Ok(bytes)
}

/// Write already-encoded PNG bytes to a file.
pub fn write_png(bytes: &[u8], path: &Path) -> Result<()> {
    std::fs::write(path, bytes).map_err(|e| WordpxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_encode_dimensions() {
        let pixels = vec![
            vec![Colour::BLACK, Colour::WHITE],
            vec![Colour::WHITE, Colour::BLACK],
        ];
        let bytes = encode_png(&pixels, 1).unwrap();

        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_encode_scaled() {
        let pixels = vec![vec![Colour::rgb(255, 0, 0), Colour::rgb(0, 255, 0)]];
        let bytes = encode_png(&pixels, 3).unwrap();

        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(img.width(), 6);
        assert_eq!(img.height(), 3);
        assert_eq!(img.get_pixel(2, 2).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(3, 0).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_encode_preserves_transparency() {
        let pixels = vec![vec![Colour::TRANSPARENT, Colour::new(10, 20, 30, 128)]];
        let bytes = encode_png(&pixels, 1).unwrap();

        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(1, 0).0, [10, 20, 30, 128]);
    }

    #[test]
    fn test_encode_empty_grid_fails() {
        assert!(encode_png(&[], 1).is_err());
        assert!(encode_png(&[vec![]], 1).is_err());
    }

    #[test]
    fn test_scale_zero_treated_as_one() {
        let pixels = vec![vec![Colour::BLACK]];
        let bytes = encode_png(&pixels, 0).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (1, 1));
    }

    #[test]
    fn test_write_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");
        let bytes = encode_png(&[vec![Colour::WHITE]], 1).unwrap();

        write_png(&bytes, &path).unwrap();
        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }
}
