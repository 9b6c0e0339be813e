//! Average colors of tiles and the distance used to compare them

use image::RgbImage;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Mean red, green and blue over all pixels of a tile
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AverageColor(pub [f64; 3]);

impl AverageColor {
    /// Build from channel values
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self([red, green, blue])
    }

    /// Per-channel mean of an RGB image, black for an empty image
    pub fn of_image(img: &RgbImage) -> Self {
        let pixel_count = u64::from(img.width()) * u64::from(img.height());
        if pixel_count == 0 {
            return Self::default();
        }

        let mut sums = [0u64; 3];
        for pixel in img.pixels() {
            for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
                *sum += u64::from(channel);
            }
        }

        let count = pixel_count as f64;
        Self(sums.map(|sum| sum as f64 / count))
    }

    /// Mean absolute per-channel difference to a pixel
    ///
    /// The three channel differences are averaged, not summed.
    pub fn distance_to(&self, pixel: [u8; 3]) -> f64 {
        let total: f64 = self
            .0
            .iter()
            .zip(pixel.iter())
            .map(|(&average, &channel)| (average - f64::from(channel)).abs())
            .sum();
        total / 3.0
    }
}

// Shortest round-trip float formatting keeps parse/serialize byte-stable
impl fmt::Display for AverageColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [red, green, blue] = self.0;
        write!(f, "{red} {green} {blue}")
    }
}

/// Reason an average color field failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ParseColorError(pub String);

impl FromStr for AverageColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut channels = [0.0f64; 3];
        let mut fields = s.split(' ');

        for channel in &mut channels {
            let field = fields
                .next()
                .ok_or_else(|| ParseColorError(format!("expected 3 channels in '{s}'")))?;
            let value: f64 = field
                .parse()
                .map_err(|e| ParseColorError(format!("invalid channel value '{field}': {e}")))?;
            if !value.is_finite() {
                return Err(ParseColorError(format!("non-finite channel value '{field}'")));
            }
            *channel = value;
        }

        if fields.next().is_some() {
            return Err(ParseColorError(format!("expected 3 channels in '{s}'")));
        }

        Ok(Self(channels))
    }
}
