//! Printable summary of one assessment and its recommendations.

pub mod views;

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::matching::distinct_labels;
use super::profile::Profile;
use super::ranking::{Recommendations, Tier};
pub use views::{CareerSummaryView, ProfileSummaryView, TierSection};

const TOP_INTEREST_LIMIT: usize = 6;
const FALLBACK_FILE_STEM: &str = "Guidance";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationReport {
    pub generated_on: NaiveDate,
    pub profile: ProfileSummaryView,
    pub sections: Vec<TierSection>,
}

impl RecommendationReport {
    pub fn build(
        profile: &Profile,
        recommendations: &Recommendations,
        generated_on: NaiveDate,
    ) -> Self {
        let summary = ProfileSummaryView {
            stream: profile.stream.trim().to_string(),
            top_interests: distinct_labels(&profile.interests)
                .into_iter()
                .take(TOP_INTEREST_LIMIT)
                .map(str::to_string)
                .collect(),
            key_strengths: distinct_labels(&profile.strengths)
                .into_iter()
                .map(str::to_string)
                .collect(),
        };

        let sections = [Tier::InStream, Tier::AiHighlighted, Tier::Other]
            .into_iter()
            .map(|tier| TierSection {
                tier,
                heading: section_heading(tier),
                careers: recommendations
                    .tier(tier)
                    .iter()
                    .enumerate()
                    .map(|(index, scored)| CareerSummaryView::from_scored(index + 1, scored))
                    .collect(),
            })
            .collect();

        Self {
            generated_on,
            profile: summary,
            sections,
        }
    }

    pub fn section(&self, tier: Tier) -> &[CareerSummaryView] {
        self.sections
            .iter()
            .find(|section| section.tier == tier)
            .map(|section| section.careers.as_slice())
            .unwrap_or_default()
    }

    /// The in-stream tier, which headlines the report.
    pub fn top_recommendations(&self) -> &[CareerSummaryView] {
        self.section(Tier::InStream)
    }

    pub fn file_name(&self) -> String {
        let stem: String = self
            .profile
            .stream
            .chars()
            .map(|ch| if matches!(ch, '/' | '\\') { '-' } else { ch })
            .collect();
        if stem.is_empty() {
            format!("Career_Report_{FALLBACK_FILE_STEM}.txt")
        } else {
            format!("Career_Report_{stem}.txt")
        }
    }

    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

fn section_heading(tier: Tier) -> &'static str {
    match tier {
        Tier::InStream => "Top Recommendations",
        other => other.label(),
    }
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "None".to_string()
    } else {
        values.join(", ")
    }
}

impl fmt::Display for RecommendationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Career Discovery Report")?;
        if self.profile.stream.is_empty() {
            writeln!(f, "Generated for an undecided student")?;
        } else {
            writeln!(f, "Generated for {} Stream Student", self.profile.stream)?;
        }
        writeln!(f, "Date: {}", self.generated_on.format("%Y-%m-%d"))?;
        writeln!(f)?;

        writeln!(f, "Your Profile Summary")?;
        writeln!(f, "  Top Interests: {}", join_or_none(&self.profile.top_interests))?;
        writeln!(f, "  Key Strengths: {}", join_or_none(&self.profile.key_strengths))?;

        for section in &self.sections {
            if section.careers.is_empty() && section.tier != Tier::InStream {
                continue;
            }
            writeln!(f)?;
            writeln!(f, "{}", section.heading)?;
            if section.careers.is_empty() {
                writeln!(f, "  No matching careers for this stream.")?;
            }
            for career in &section.careers {
                writeln!(f, "{}. {} ({}% Match)", career.rank, career.title, career.match_score)?;
                if !career.description.is_empty() {
                    writeln!(f, "   {}", career.description)?;
                }
                writeln!(
                    f,
                    "   Avg Salary: {} | Growth: {} | Education: {}",
                    career.salary, career.growth, career.education
                )?;
                writeln!(f, "   Key Exams: {}", join_or_none(&career.exams))?;
                if !career.roadmap.is_empty() {
                    writeln!(f, "   Learning Roadmap:")?;
                    for step in &career.roadmap {
                        writeln!(f, "     - {step}")?;
                    }
                }
            }
        }

        writeln!(f)?;
        write!(f, "Career Compass - Generated Report")
    }
}
