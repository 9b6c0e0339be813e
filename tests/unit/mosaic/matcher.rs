//! Tests for nearest-color matching and mask construction

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use ndarray::Array2;
    use photomosaic::mosaic::matcher::{Mask, match_palette, nearest_entry, pixel_grid};
    use photomosaic::palette::color::AverageColor;
    use photomosaic::palette::fingerprint::TileFingerprint;
    use photomosaic::palette::record::Palette;

    fn black() -> TileFingerprint {
        TileFingerprint::of_bytes(b"black")
    }

    fn white() -> TileFingerprint {
        TileFingerprint::of_bytes(b"white")
    }

    fn black_white_palette() -> Palette {
        let mut palette = Palette::new();
        palette.insert(black(), AverageColor::new(0.0, 0.0, 0.0));
        palette.insert(white(), AverageColor::new(255.0, 255.0, 255.0));
        palette
    }

    // Tests dark and light pixels pick the closest extreme
    // Verified by selecting the maximum distance
    #[test]
    fn test_nearest_extremes() {
        let palette = black_white_palette();
        let entries = palette.entries();

        assert_eq!(
            nearest_entry([10, 10, 10], entries).unwrap().fingerprint,
            black()
        );
        assert_eq!(
            nearest_entry([250, 250, 250], entries).unwrap().fingerprint,
            white()
        );
    }

    // Tests equal distances resolve to the earlier palette entry
    // Verified by replacing on equal distance
    #[test]
    fn test_tie_prefers_first_entry() {
        let mut forward = Palette::new();
        forward.insert(black(), AverageColor::new(0.0, 0.0, 0.0));
        forward.insert(white(), AverageColor::new(254.0, 254.0, 254.0));

        let mut reversed = Palette::new();
        reversed.insert(white(), AverageColor::new(254.0, 254.0, 254.0));
        reversed.insert(black(), AverageColor::new(0.0, 0.0, 0.0));

        let pixel = [127, 127, 127];
        assert_eq!(
            nearest_entry(pixel, forward.entries()).unwrap().fingerprint,
            black()
        );
        assert_eq!(
            nearest_entry(pixel, reversed.entries()).unwrap().fingerprint,
            white()
        );
    }

    // Tests per-channel differences decide the match, not one channel
    // Verified by comparing only the red channel
    #[test]
    fn test_all_channels_considered() {
        let red = TileFingerprint::of_bytes(b"red");
        let purple = TileFingerprint::of_bytes(b"purple");
        let mut palette = Palette::new();
        palette.insert(red, AverageColor::new(200.0, 0.0, 0.0));
        palette.insert(purple, AverageColor::new(190.0, 0.0, 200.0));

        assert_eq!(
            nearest_entry([200, 0, 190], palette.entries())
                .unwrap()
                .fingerprint,
            purple
        );
    }

    // Tests empty palettes produce no match
    // Verified by returning a default fingerprint
    #[test]
    fn test_empty_palette() {
        let palette = Palette::new();
        let grid = Array2::from_elem((2, 2), [0u8, 0, 0]);

        assert!(nearest_entry([0, 0, 0], palette.entries()).is_none());
        assert!(match_palette(&grid, &palette).is_none());
    }

    // Tests pixel grid is indexed by row then column
    // Verified by transposing the grid
    #[test]
    fn test_pixel_grid_orientation() {
        let mut img = RgbImage::from_pixel(3, 2, Rgb([0, 0, 0]));
        img.put_pixel(2, 1, Rgb([1, 2, 3]));

        let grid = pixel_grid(&img);
        assert_eq!(grid.dim(), (2, 3));
        assert_eq!(grid[(1, 2)], [1, 2, 3]);
    }

    // Tests mask matches grid dimensions and only uses palette fingerprints
    // Verified by swapping rows and columns in the mask
    #[test]
    fn test_mask_shape_and_contents() {
        let palette = black_white_palette();
        let grid = Array2::from_shape_vec(
            (2, 3),
            vec![
                [0, 0, 0],
                [255, 255, 255],
                [20, 20, 20],
                [240, 240, 240],
                [0, 0, 0],
                [200, 200, 200],
            ],
        )
        .unwrap();

        let mask = match_palette(&grid, &palette).unwrap();

        assert_eq!((mask.rows(), mask.cols()), (2, 3));
        assert_eq!(mask.get(0, 1), Some(&white()));
        assert_eq!(mask.get(1, 1), Some(&black()));
        assert_eq!(mask.get(2, 0), None);
        assert!(mask.cells().iter().all(|f| palette.contains(f)));
    }

    // Tests distinct fingerprints are listed once in first-seen order
    // Verified by returning every cell
    #[test]
    fn test_mask_distinct() {
        let cells =
            Array2::from_shape_vec((2, 2), vec![white(), black(), white(), white()]).unwrap();
        let mask = Mask::from_cells(cells);

        assert_eq!(mask.distinct(), vec![white(), black()]);
    }

    // Tests matching the same input twice gives identical masks
    // Verified by iterating a hash set of entries
    #[test]
    fn test_matching_is_deterministic() {
        let mut palette = Palette::new();
        for i in 0..16u8 {
            palette.insert(
                TileFingerprint::of_bytes(&[i]),
                AverageColor::new(f64::from(i) * 16.0, 128.0, 255.0 - f64::from(i) * 16.0),
            );
        }
        let grid = Array2::from_shape_fn((8, 8), |(r, c)| [(r * 32) as u8, (c * 32) as u8, 7]);

        assert_eq!(match_palette(&grid, &palette), match_palette(&grid, &palette));
    }

    // Tests every mask cell is the nearest entry of its own source pixel
    // Verified by reading the pixel at the transposed position
    #[test]
    fn test_mask_cells_follow_source_pixels() {
        let mut palette = Palette::new();
        for level in 0..16u8 {
            palette.insert(
                TileFingerprint::of_bytes(&[level]),
                AverageColor::new(f64::from(level) * 16.0, 128.0, 255.0 - f64::from(level) * 16.0),
            );
        }
        let img = RgbImage::from_fn(7, 5, |x, y| {
            Rgb([(x * 36) as u8, (y * 50) as u8, ((x + y) * 20) as u8])
        });
        let grid = pixel_grid(&img);

        let mask = match_palette(&grid, &palette).unwrap();

        assert_eq!((mask.rows(), mask.cols()), (5, 7));
        for ((row, col), pixel) in grid.indexed_iter() {
            let nearest = nearest_entry(*pixel, palette.entries()).unwrap();
            assert_eq!(mask.get(row, col), Some(&nearest.fingerprint));
            assert!(palette.contains(&nearest.fingerprint));
        }
    }
}
