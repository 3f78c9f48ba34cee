use std::collections::HashSet;

use proptest::prelude::*;
use proptest::sample::select;

use crate::guidance::catalog::{CareerCatalog, CareerRecord};
use crate::guidance::matching::loosely_matches;
use crate::guidance::profile::Profile;
use crate::guidance::ranking::{RecommendationEngine, Tier};
use crate::guidance::scoring::{CareerScorer, ScoredCareer};

const TAGS: &[&str] = &[
    "Coding",
    "Tech",
    "Math",
    "Finance",
    "Law",
    "Business",
    "Design",
    "Visual Design",
    "Research",
    "Web Development",
    "Game",
    "Medical",
    "Biology",
];
const INTERESTS: &[&str] = &[
    "Coding",
    "Game Development",
    "Web",
    "Law",
    "design",
    "Medical",
    "Painting",
];
const STRENGTHS: &[&str] = &["Logic & Math", "Visual Creativity", "Communication", "Empathy"];
const GOALS: &[&str] = &["High Salary", "Remote Work", "Innovation", "Job Security"];
const CAREER_STREAMS: &[&str] = &[
    "Science (Math)",
    "Science (Bio)",
    "Commerce",
    "Arts & Humanities",
    "Technology",
];
const PROFILE_STREAMS: &[&str] = &["Science (Math)", "Commerce", "Technology", "Arts & Humanities", ""];
const SALARIES: &[&str] = &["$45k - $80k", "$75k - $160k", "$200k+", ""];

fn label_vec(pool: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(select(pool), 0..5)
        .prop_map(|labels| labels.into_iter().map(String::from).collect())
}

fn profile_strategy() -> impl Strategy<Value = Profile> {
    (
        select(PROFILE_STREAMS),
        label_vec(INTERESTS),
        label_vec(STRENGTHS),
        label_vec(GOALS),
    )
        .prop_map(|(stream, interests, strengths, goals)| Profile {
            stream: stream.to_string(),
            interests,
            strengths,
            weaknesses: Vec::new(),
            goals,
        })
}

fn catalog_strategy() -> impl Strategy<Value = CareerCatalog> {
    proptest::collection::vec(
        (
            label_vec(TAGS),
            label_vec(CAREER_STREAMS),
            select(SALARIES),
            any::<bool>(),
        ),
        0..14,
    )
    .prop_map(|rows| {
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(position, (tags, stream, salary, remote))| {
                let mut record = CareerRecord::new(format!("career-{position}"));
                record.tags = tags;
                record.stream = stream;
                record.salary = salary.to_string();
                if remote {
                    record.work_environment = "Remote-Friendly".to_string();
                }
                record
            })
            .collect();
        CareerCatalog::new(records).expect("generated ids are unique")
    })
}

fn catalog_position(scored: &ScoredCareer) -> usize {
    scored
        .career
        .id
        .as_str()
        .trim_start_matches("career-")
        .parse()
        .expect("generated id")
}

proptest! {
    #[test]
    fn match_scores_stay_below_one_hundred(profile in profile_strategy(), catalog in catalog_strategy()) {
        let scorer = CareerScorer::default();
        for career in &catalog {
            let scored = scorer.score(&profile, career);
            prop_assert!(scored.match_score <= 99);
        }
    }

    #[test]
    fn stream_match_means_membership(profile in profile_strategy(), catalog in catalog_strategy()) {
        let scorer = CareerScorer::default();
        for career in &catalog {
            let expected = !profile.stream.is_empty() && career.stream.contains(&profile.stream);
            prop_assert_eq!(scorer.score(&profile, career).is_stream_match, expected);
        }
    }

    #[test]
    fn low_stream_matches_land_in_floor_band(profile in profile_strategy(), catalog in catalog_strategy()) {
        let scorer = CareerScorer::default();
        for career in &catalog {
            let scored = scorer.score(&profile, career);
            let raw_percentage = scorer.raw_percentage(scored.raw_score);
            if scored.is_stream_match && raw_percentage < 40 {
                prop_assert!(scored.floor_applied);
                prop_assert!((45..=54).contains(&scored.match_score));
            } else {
                prop_assert!(!scored.floor_applied);
                prop_assert_eq!(scored.match_score, raw_percentage);
            }
        }
    }

    #[test]
    fn scores_above_floor_are_repeatable(profile in profile_strategy(), catalog in catalog_strategy()) {
        let scorer = CareerScorer::default();
        for career in &catalog {
            let first = scorer.score(&profile, career);
            if !first.floor_applied {
                prop_assert_eq!(first, scorer.score(&profile, career));
            }
        }
    }

    #[test]
    fn tiers_are_disjoint_sorted_and_bounded(profile in profile_strategy(), catalog in catalog_strategy()) {
        let recommendations = RecommendationEngine::default().evaluate(Some(&profile), &catalog);

        prop_assert!(recommendations.ai_highlighted.len() <= 5);
        prop_assert!(recommendations.in_stream.len() <= 3);
        prop_assert!(recommendations.other.len() <= 3);

        let mut seen = HashSet::new();
        for (_, scored) in recommendations.iter() {
            prop_assert!(seen.insert(scored.career.id.clone()));
        }

        for tier in Tier::ordered() {
            for pair in recommendations.tier(tier).windows(2) {
                prop_assert!(pair[0].match_score >= pair[1].match_score);
                if pair[0].match_score == pair[1].match_score {
                    prop_assert!(catalog_position(&pair[0]) < catalog_position(&pair[1]));
                }
            }
        }
    }

    #[test]
    fn tier_membership_follows_filters(profile in profile_strategy(), catalog in catalog_strategy()) {
        let recommendations = RecommendationEngine::default().evaluate(Some(&profile), &catalog);

        for scored in &recommendations.ai_highlighted {
            let hit = profile.interests.iter().any(|interest| {
                scored.career.tags.iter().any(|tag| loosely_matches(interest, tag))
            });
            prop_assert!(hit);
        }
        prop_assert!(recommendations.in_stream.iter().all(|scored| scored.is_stream_match));
        prop_assert!(recommendations.other.iter().all(|scored| !scored.is_stream_match));
    }
}
