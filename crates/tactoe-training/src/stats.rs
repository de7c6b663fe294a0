//! Per-generation population summaries.

use tactoe_evaluator::{board_feature::BoardFeature, competitor::Competitor};

/// Minimum, maximum and mean of a set of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

impl SummaryStats {
    /// Summarizes `values`, or returns `None` if there are none.
    ///
    /// ```
    /// use tactoe_training::stats::SummaryStats;
    ///
    /// let stats = SummaryStats::new([4.0, -2.0, 1.0]).unwrap();
    /// assert_eq!((stats.min, stats.max, stats.mean), (-2.0, 4.0, 1.0));
    /// assert!(SummaryStats::new([]).is_none());
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut count = 0_u32;
        let mut sum = 0.0;
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for value in values {
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }
        #[expect(clippy::cast_precision_loss)]
        let mean = sum / count as f32;
        (count > 0).then_some(Self { min, max, mean })
    }
}

/// Weight and win-count spread across one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationStats {
    /// One summary per feature, in [`BoardFeature::ALL`] order.
    pub weights: [SummaryStats; BoardFeature::COUNT],
    pub wins: SummaryStats,
}

impl PopulationStats {
    /// Summarizes a population and its win counts (same order).
    ///
    /// Returns `None` for an empty population.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn new(population: &[Competitor], wins: &[u32]) -> Option<Self> {
        let wins = SummaryStats::new(wins.iter().map(|w| *w as f32))?;
        let mut weights = [wins; BoardFeature::COUNT];
        for (slot, feature) in weights.iter_mut().zip(BoardFeature::ALL) {
            *slot = SummaryStats::new(population.iter().map(|c| c.weights()[feature]))?;
        }
        Some(Self { weights, wins })
    }
}
