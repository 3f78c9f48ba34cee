use super::super::catalog::CareerRecord;
use super::super::matching::{distinct_labels, normalize_label, same_label, LabelSet};
use super::super::profile::Profile;
use super::config::ScoringConfig;
use super::{ScoreComponent, ScoreFactor};

/// Strengths that earn a bonus when the career carries related tags.
const STRENGTH_CONTEXT: &[(&str, &[&str])] = &[
    ("Logic & Math", &["Math", "Coding", "Finance"]),
    ("Visual Creativity", &["Design", "Art", "Creative"]),
    ("Communication", &["Business", "Law", "Management"]),
];

/// Leading digits of six-figure USD ranges such as "$120k".
const HIGH_SALARY_MARKERS: &[&str] = &["$1", "$2", "$3"];

const INNOVATION_TAGS: &[&str] = &["Tech", "Research"];

pub(crate) struct ScoreSignals {
    pub is_stream_match: bool,
}

fn is_stream_match(profile: &Profile, career: &CareerRecord) -> bool {
    career
        .stream
        .iter()
        .any(|stream| same_label(stream, &profile.stream))
}

pub(crate) fn score_career(
    profile: &Profile,
    career: &CareerRecord,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, u32, ScoreSignals) {
    let mut components = Vec::new();
    let mut total_score: u32 = 0;
    let tags = LabelSet::from_labels(&career.tags);

    let stream_match = is_stream_match(profile, career);
    if stream_match {
        components.push(ScoreComponent {
            factor: ScoreFactor::StreamRelevance,
            points: config.stream_match,
            notes: format!("career is open to the {} stream", profile.stream.trim()),
        });
        total_score += config.stream_match;
    }

    for interest in distinct_labels(&profile.interests) {
        if tags.contains(interest) {
            components.push(ScoreComponent {
                factor: ScoreFactor::InterestOverlap,
                points: config.interest_exact,
                notes: format!("interest '{interest}' is a career tag"),
            });
            total_score += config.interest_exact;
        } else if tags.loosely_contains(interest) {
            components.push(ScoreComponent {
                factor: ScoreFactor::InterestOverlap,
                points: config.interest_partial,
                notes: format!("interest '{interest}' partially matches a career tag"),
            });
            total_score += config.interest_partial;
        }
    }

    for strength in distinct_labels(&profile.strengths) {
        if tags.contains(strength) {
            components.push(ScoreComponent {
                factor: ScoreFactor::StrengthAlignment,
                points: config.strength_exact,
                notes: format!("strength '{strength}' is a career tag"),
            });
            total_score += config.strength_exact;
        }

        for (context_strength, related_tags) in STRENGTH_CONTEXT {
            if same_label(strength, context_strength) && tags.contains_any(related_tags) {
                components.push(ScoreComponent {
                    factor: ScoreFactor::StrengthAlignment,
                    points: config.strength_context,
                    notes: format!(
                        "strength '{strength}' suits {} work",
                        related_tags.join("/")
                    ),
                });
                total_score += config.strength_context;
            }
        }
    }

    for goal in distinct_labels(&profile.goals) {
        let note = if same_label(goal, "High Salary")
            && HIGH_SALARY_MARKERS
                .iter()
                .any(|marker| career.salary.contains(marker))
        {
            Some(format!("salary range {} supports a high salary", career.salary))
        } else if same_label(goal, "Remote Work")
            && career.work_environment.to_lowercase().contains("remote")
        {
            Some("work environment allows remote work".to_string())
        } else if same_label(goal, "Innovation") && tags.contains_any(INNOVATION_TAGS) {
            Some("tech or research focus supports innovation".to_string())
        } else {
            None
        };

        if let Some(notes) = note {
            components.push(ScoreComponent {
                factor: ScoreFactor::GoalAlignment,
                points: config.goal_alignment,
                notes,
            });
            total_score += config.goal_alignment;
        }
    }

    let signals = ScoreSignals {
        is_stream_match: stream_match,
    };

    (components, total_score, signals)
}
