use tracing::debug;

use crate::imaging::greyscale::Image;

/// Aggregate pixel statistics. `stddev` is the population standard deviation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImageStats {
    pub min: f32,
    pub max: f32,
    pub average: f32,
    pub stddev: f32,
}

impl ImageStats {
    pub(super) fn uniform(value: f32) -> Self {
        Self {
            min: value,
            max: value,
            average: value,
            stddev: 0.0,
        }
    }

    /// Two passes: min, max and sum first, then the variance around the mean.
    ///
    /// An empty buffer yields all zeros.
    fn compute(pixels: &[f32]) -> Self {
        let Some(&first) = pixels.first() else {
            return Self::default();
        };

        let count = pixels.len() as f64;
        let (min, max, sum) = pixels.iter().fold(
            (first, first, 0.0f64),
            |(min, max, sum), &v| (min.min(v), max.max(v), sum + v as f64),
        );
        let average = sum / count;

        let variance = pixels
            .iter()
            .map(|&v| {
                let d = v as f64 - average;
                d * d
            })
            .sum::<f64>()
            / count;

        Self {
            min,
            max,
            average: average as f32,
            stddev: variance.sqrt() as f32,
        }
    }
}

impl Image {
    /// Recomputes the cached statistics if a mutation made them stale.
    pub fn update_stats(&mut self) {
        if self.stats_valid {
            return;
        }

        debug!("Recomputing statistics for {}x{} image", self.width, self.height);
        self.stats = ImageStats::compute(&self.pixels);
        self.stats_valid = true;
    }

    /// Whether the cached statistics reflect the current pixels.
    pub fn stats_up_to_date(&self) -> bool {
        self.stats_valid
    }

    pub fn stats(&mut self) -> ImageStats {
        self.update_stats();
        self.stats
    }

    pub fn min_value(&mut self) -> f32 {
        self.stats().min
    }

    pub fn max_value(&mut self) -> f32 {
        self.stats().max
    }

    pub fn average_value(&mut self) -> f32 {
        self.stats().average
    }

    pub fn stddev_value(&mut self) -> f32 {
        self.stats().stddev
    }

    /// Histogram stretch to [0, 1]: `(p - min) / (max - min)`.
    ///
    /// A uniform image divides zero by zero and comes back all NaN.
    pub fn normalise(&mut self) -> Image {
        let ImageStats { min, max, .. } = self.stats();
        let range = max - min;
        self.map_pixels(|p| (p - min) / range)
    }
}
