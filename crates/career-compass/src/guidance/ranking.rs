use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::catalog::{CareerCatalog, CareerId};
use super::matching::LabelSet;
use super::profile::Profile;
use super::scoring::{CareerScorer, ScoredCareer};

/// Output bucket, in order of visual prominence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    AiHighlighted,
    InStream,
    Other,
}

impl Tier {
    pub fn ordered() -> [Tier; 3] {
        [Tier::AiHighlighted, Tier::InStream, Tier::Other]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Tier::AiHighlighted => "Top Interest Matches",
            Tier::InStream => "Standard Matches",
            Tier::Other => "Other Options",
        }
    }
}

/// Maximum size of each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierLimits {
    pub ai_highlighted: usize,
    pub in_stream: usize,
    pub other: usize,
}

impl Default for TierLimits {
    fn default() -> Self {
        Self {
            ai_highlighted: 5,
            in_stream: 3,
            other: 3,
        }
    }
}

/// Three disjoint ranked lists produced for one profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    pub ai_highlighted: Vec<ScoredCareer>,
    pub in_stream: Vec<ScoredCareer>,
    pub other: Vec<ScoredCareer>,
}

impl Recommendations {
    pub fn tier(&self, tier: Tier) -> &[ScoredCareer] {
        match tier {
            Tier::AiHighlighted => &self.ai_highlighted,
            Tier::InStream => &self.in_stream,
            Tier::Other => &self.other,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ai_highlighted.is_empty() && self.in_stream.is_empty() && self.other.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ai_highlighted.len() + self.in_stream.len() + self.other.len()
    }

    /// Every recommendation with its tier, most prominent tier first.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &ScoredCareer)> {
        Tier::ordered()
            .into_iter()
            .flat_map(move |tier| self.tier(tier).iter().map(move |scored| (tier, scored)))
    }
}

/// Scores a whole catalog and partitions the results into tiers.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    scorer: CareerScorer,
    limits: TierLimits,
}

impl RecommendationEngine {
    pub fn new(scorer: CareerScorer, limits: TierLimits) -> Self {
        Self { scorer, limits }
    }

    pub fn scorer(&self) -> &CareerScorer {
        &self.scorer
    }

    pub fn limits(&self) -> TierLimits {
        self.limits
    }

    /// Rank `catalog` for `profile`. A missing profile yields empty tiers.
    pub fn evaluate(&self, profile: Option<&Profile>, catalog: &CareerCatalog) -> Recommendations {
        let Some(profile) = profile else {
            debug!("no profile available, returning empty recommendations");
            return Recommendations::default();
        };

        let scored: Vec<(ScoredCareer, bool)> = catalog
            .iter()
            .map(|career| {
                let tags = LabelSet::from_labels(&career.tags);
                let interest_hit = profile
                    .interests
                    .iter()
                    .any(|interest| tags.loosely_contains(interest));
                (self.scorer.score(profile, career), interest_hit)
            })
            .collect();

        let ai_highlighted = rank(
            scored
                .iter()
                .filter(|(_, interest_hit)| *interest_hit)
                .map(|(career, _)| career),
            self.limits.ai_highlighted,
        );

        let (in_stream, other) = {
            let highlighted: HashSet<&CareerId> =
                ai_highlighted.iter().map(|scored| &scored.career.id).collect();

            let in_stream = rank(
                scored.iter().map(|(career, _)| career).filter(|career| {
                    career.is_stream_match && !highlighted.contains(&career.career.id)
                }),
                self.limits.in_stream,
            );

            let other = rank(
                scored.iter().map(|(career, _)| career).filter(|career| {
                    !career.is_stream_match && !highlighted.contains(&career.career.id)
                }),
                self.limits.other,
            );

            (in_stream, other)
        };

        debug!(
            catalog = catalog.len(),
            ai_highlighted = ai_highlighted.len(),
            in_stream = in_stream.len(),
            other = other.len(),
            "ranked career recommendations"
        );

        Recommendations {
            ai_highlighted,
            in_stream,
            other,
        }
    }
}

/// Stable descending sort by match score, so ties keep catalog order.
fn rank<'a, I>(candidates: I, limit: usize) -> Vec<ScoredCareer>
where
    I: Iterator<Item = &'a ScoredCareer>,
{
    let mut ranked: Vec<&ScoredCareer> = candidates.collect();
    ranked.sort_by(|left, right| right.match_score.cmp(&left.match_score));
    ranked.into_iter().take(limit).cloned().collect()
}
