mod config;
mod floor;
mod rules;

pub use config::ScoringConfig;
pub use floor::{FixedFloorOffset, FloorOffset, RandomFloorOffset};

use std::sync::Arc;

use serde::Serialize;

use super::catalog::CareerRecord;
use super::profile::Profile;

/// Stateless scorer applying the rubric to one profile/career pair.
#[derive(Clone)]
pub struct CareerScorer {
    config: ScoringConfig,
    floor: Arc<dyn FloorOffset>,
}

impl std::fmt::Debug for CareerScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CareerScorer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for CareerScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl CareerScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_floor_offset(config, Arc::new(RandomFloorOffset))
    }

    pub fn with_floor_offset(config: ScoringConfig, floor: Arc<dyn FloorOffset>) -> Self {
        Self { config, floor }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Percentage before the in-stream floor is applied, capped.
    pub fn raw_percentage(&self, raw_score: u32) -> u8 {
        if self.config.max_score == 0 {
            return 0;
        }
        let percentage = (raw_score as f64 / self.config.max_score as f64 * 100.0).round();
        percentage.min(self.config.percentage_cap as f64) as u8
    }

    pub fn score(&self, profile: &Profile, career: &CareerRecord) -> ScoredCareer {
        let (components, raw_score, signals) = rules::score_career(profile, career, &self.config);

        let mut match_score = self.raw_percentage(raw_score);
        let floor_applied =
            signals.is_stream_match && match_score < self.config.stream_floor_threshold;
        if floor_applied {
            let offset = self.floor.offset(self.config.stream_floor_span);
            match_score = self
                .config
                .stream_floor_base
                .saturating_add(offset)
                .min(self.config.percentage_cap);
        }

        ScoredCareer {
            career: career.clone(),
            match_score,
            is_stream_match: signals.is_stream_match,
            raw_score,
            floor_applied,
            components,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    StreamRelevance,
    InterestOverlap,
    StrengthAlignment,
    GoalAlignment,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreFactor::StreamRelevance => "Stream Relevance",
            ScoreFactor::InterestOverlap => "Interest Overlap",
            ScoreFactor::StrengthAlignment => "Strengths Alignment",
            ScoreFactor::GoalAlignment => "Goal Alignment",
        }
    }
}

/// Discrete contribution to a match score, kept for explanations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: u32,
    pub notes: String,
}

/// A catalog record with its match against the current profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCareer {
    #[serde(flatten)]
    pub career: CareerRecord,
    /// Displayed percentage, 0 to 99.
    pub match_score: u8,
    pub is_stream_match: bool,
    pub raw_score: u32,
    pub floor_applied: bool,
    pub components: Vec<ScoreComponent>,
}

impl ScoredCareer {
    pub fn points_for(&self, factor: ScoreFactor) -> u32 {
        self.components
            .iter()
            .filter(|component| component.factor == factor)
            .map(|component| component.points)
            .sum()
    }
}
