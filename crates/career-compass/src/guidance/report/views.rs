use serde::Serialize;

use super::super::catalog::CareerId;
use super::super::ranking::Tier;
use super::super::scoring::ScoredCareer;

/// Roadmap steps shown per career.
pub(crate) const ROADMAP_PREVIEW: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummaryView {
    pub stream: String,
    pub top_interests: Vec<String>,
    pub key_strengths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerSummaryView {
    pub rank: usize,
    pub id: CareerId,
    pub title: String,
    pub description: String,
    pub match_score: u8,
    pub salary: String,
    pub growth: String,
    pub education: String,
    pub exams: Vec<String>,
    pub roadmap: Vec<String>,
}

impl CareerSummaryView {
    pub(crate) fn from_scored(rank: usize, scored: &ScoredCareer) -> Self {
        let career = &scored.career;
        Self {
            rank,
            id: career.id.clone(),
            title: career.title.clone(),
            description: career.description.clone(),
            match_score: scored.match_score,
            salary: career.salary.clone(),
            growth: career.growth.clone(),
            education: career.education.ug.clone(),
            exams: career.exams.clone(),
            roadmap: career.roadmap.iter().take(ROADMAP_PREVIEW).cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierSection {
    pub tier: Tier,
    pub heading: &'static str,
    pub careers: Vec<CareerSummaryView>,
}
