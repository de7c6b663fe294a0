use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tactoe_engine::Board;
use tactoe_evaluator::{board_feature::BoardFeature, competitor::Competitor, weights::Weights};

/// A trained competitor as stored on disk.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompetitorModel {
    pub name: String,
    pub trained_at: DateTime<Utc>,
    pub generation: usize,
    pub wins: u32,
    /// Weights keyed by [`BoardFeature::id`].
    pub weights: BTreeMap<String, f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lost_positions: Vec<Board>,
}

impl CompetitorModel {
    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open competitor model file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let model = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to read competitor model file: {}", path.display()))?;

        Ok(model)
    }

    pub fn from_competitor(name: &str, competitor: &Competitor, wins: u32) -> Self {
        let mut lost_positions: Vec<Board> = competitor.lost_positions().iter().copied().collect();
        lost_positions.sort_by_cached_key(Board::to_notation);
        Self {
            name: name.to_owned(),
            trained_at: Utc::now(),
            generation: competitor.generation(),
            wins,
            weights: competitor
                .weights()
                .features()
                .map(|(feature, weight)| (feature.id().to_owned(), weight))
                .collect(),
            lost_positions,
        }
    }

    pub fn to_competitor(&self) -> anyhow::Result<Competitor> {
        if let Some(unknown) = self
            .weights
            .keys()
            .find(|id| BoardFeature::ALL.iter().all(|f| f.id() != id.as_str()))
        {
            anyhow::bail!("Feature ID {unknown} in model not found");
        }

        let mut weights = Weights::ZERO;
        for (feature, slot) in BoardFeature::ALL.into_iter().zip(weights.iter_mut()) {
            *slot = *self
                .weights
                .get(feature.id())
                .ok_or_else(|| anyhow::anyhow!("Model has no weight for {}", feature.id()))?;
        }

        let mut competitor = Competitor::new(weights, self.generation);
        for board in &self.lost_positions {
            competitor
                .remember_loss(board)
                .with_context(|| format!("Invalid lost position in model: {}", board.to_notation()))?;
        }
        Ok(competitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competitor_survives_model_round_trip() {
        let mut competitor =
            Competitor::from_slice(&[1.0, -2.0, 3.5, 30.0, 0.0, -30.0], 12).unwrap();
        let lost: Board = "XOXOXO...".parse().unwrap();
        competitor.remember_loss(&lost).unwrap();

        let model = CompetitorModel::from_competitor("best", &competitor, 9);
        assert_eq!(model.weights["winning_line_count"], 30.0);
        let json = serde_json::to_string(&model).unwrap();
        let restored: CompetitorModel = serde_json::from_str(&json).unwrap();
        let restored = restored.to_competitor().unwrap();

        assert_eq!(restored.weights(), competitor.weights());
        assert_eq!(restored.generation(), 12);
        assert!(restored.has_lost_from(&lost));
    }

    #[test]
    fn test_missing_or_unknown_feature_is_rejected() {
        let competitor = Competitor::new(Weights::ZERO, 0);
        let mut model = CompetitorModel::from_competitor("flat", &competitor, 0);
        model.weights.remove("center_count");
        assert!(model.to_competitor().is_err());

        let mut model = CompetitorModel::from_competitor("flat", &competitor, 0);
        model.weights.insert("edge_count".to_owned(), 1.0);
        assert!(model.to_competitor().is_err());
    }
}
