//! Word grid layout.
//!
//! Words flow left-to-right into rows of `grid_width` cells, one cell
//! per word. Cells past the last word take the project's fill colour.

use crate::engine;
use crate::error::Result;
use crate::types::{Colour, FillMode, ProjectPayload};

/// Tokenize source text into words.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Effective grid dimensions for a payload, `(width, height)` in cells.
pub fn dimensions(payload: &ProjectPayload) -> (u32, u32) {
    let count = words(&payload.text).len() as u32;
    let width = if payload.trim_width {
        payload.grid_width.min(count).max(1)
    } else {
        payload.grid_width.max(1)
    };
    let height = count.div_ceil(width).max(1);
    (width, height)
}

/// Render a payload to a grid of cell colours.
///
/// The parameter snapshot inside `payload` is read-only here; one call
/// observes one consistent set of parameters for every cell, which is
/// what makes the embedded record reproduce the image exactly.
pub fn render_grid(payload: &ProjectPayload) -> Result<Vec<Vec<Colour>>> {
    payload.validate()?;

    let words = words(&payload.text);
    let (width, height) = dimensions(payload);

    let fill = match payload.fill_mode {
        FillMode::Transparent => Colour::TRANSPARENT,
        FillMode::Custom => payload.fill_colour,
    };

    let mut rows = Vec::with_capacity(height as usize);
    for y in 0..height {
        let mut row = Vec::with_capacity(width as usize);
        for x in 0..width {
            let index = (y * width + x) as usize;
            let cell = words
                .get(index)
                .and_then(|word| engine::derive(word, payload.seed, &payload.params))
                .map_or(fill, |derived| derived.colour());
            row.push(cell);
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorParameters;

    fn payload(text: &str, width: u32) -> ProjectPayload {
        ProjectPayload {
            grid_width: width,
            ..ProjectPayload::new(text)
        }
    }

    #[test]
    fn test_words_split_on_whitespace() {
        assert_eq!(words("a  b\tc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(words("   "), Vec::<&str>::new());
    }

    #[test]
    fn test_dimensions_full_rows() {
        assert_eq!(dimensions(&payload("a b c d e f", 3)), (3, 2));
    }

    #[test]
    fn test_dimensions_partial_row() {
        assert_eq!(dimensions(&payload("a b c d", 3)), (3, 2));
    }

    #[test]
    fn test_dimensions_trim_width() {
        let mut p = payload("a b", 8);
        p.trim_width = true;
        assert_eq!(dimensions(&p), (2, 1));

        p.text = String::new();
        assert_eq!(dimensions(&p), (1, 1));
    }

    #[test]
    fn test_empty_text_is_single_fill_cell() {
        let grid = render_grid(&payload("", 4)).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0].len(), 4);
        assert!(grid[0].iter().all(|c| c.is_transparent()));
    }

    #[test]
    fn test_trailing_cells_use_custom_fill() {
        let mut p = payload("a b c d", 3);
        p.fill_mode = crate::types::FillMode::Custom;
        p.fill_colour = Colour::rgb(1, 2, 3);

        let grid = render_grid(&p).unwrap();
        assert!(!grid[1][0].is_transparent());
        assert_eq!(grid[1][1], Colour::rgb(1, 2, 3));
        assert_eq!(grid[1][2], Colour::rgb(1, 2, 3));
    }

    #[test]
    fn test_word_cells_match_engine() {
        let p = payload("alpha beta", 2);
        let grid = render_grid(&p).unwrap();
        let expected = engine::derive("beta", p.seed, &p.params)
            .unwrap()
            .colour();
        assert_eq!(grid[0][1], expected);
    }

    #[test]
    fn test_invalid_params_rejected_before_render() {
        let mut p = payload("word", 2);
        p.params = ColorParameters {
            bit_shift_amount: 99,
            ..Default::default()
        };
        assert!(render_grid(&p).is_err());
    }
}
