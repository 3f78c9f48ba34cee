use super::common::*;
use crate::guidance::catalog::{CareerCatalog, CareerRecord};
use crate::guidance::profile::Profile;
use crate::guidance::ranking::{RecommendationEngine, Tier, TierLimits};

#[test]
fn math_profile_ranks_bundled_catalog() {
    let recommendations = pinned_engine(0).evaluate(Some(&math_profile()), &bundled_catalog());

    assert_eq!(
        ids(&recommendations.ai_highlighted),
        vec!["frontend-dev", "backend-dev", "data-scientist", "ai-engineer"]
    );
    assert_eq!(ids(&recommendations.in_stream), vec!["ux-designer"]);
    assert_eq!(recommendations.in_stream[0].match_score, 45);
    assert!(recommendations.in_stream[0].floor_applied);
    assert_eq!(
        ids(&recommendations.other),
        vec!["chartered-accountant", "doctor", "lawyer"]
    );
}

#[test]
fn commerce_profile_ranks_bundled_catalog() {
    let recommendations =
        pinned_engine(0).evaluate(Some(&commerce_profile()), &bundled_catalog());

    assert_eq!(
        ids(&recommendations.ai_highlighted),
        vec!["lawyer", "chartered-accountant"]
    );
    assert_eq!(recommendations.ai_highlighted[0].match_score, 62);
    assert_eq!(ids(&recommendations.in_stream), vec!["data-scientist"]);
    assert_eq!(
        ids(&recommendations.other),
        vec!["frontend-dev", "ai-engineer", "ux-designer"]
    );
}

#[test]
fn missing_profile_yields_empty_tiers() {
    let recommendations = pinned_engine(0).evaluate(None, &bundled_catalog());
    assert!(recommendations.is_empty());
    assert_eq!(recommendations.len(), 0);
}

#[test]
fn empty_catalog_yields_empty_tiers() {
    let catalog = CareerCatalog::default();
    let recommendations = pinned_engine(0).evaluate(Some(&math_profile()), &catalog);
    assert!(recommendations.is_empty());
}

fn goal_career(id: &str, tags: &[&str], streams: &[&str], salary: &str, remote: bool) -> CareerRecord {
    let mut record = career(id, tags, streams);
    record.salary = salary.to_string();
    if remote {
        record.work_environment = "Remote".to_string();
    }
    record
}

#[test]
fn sixth_interest_match_falls_through_to_other_tiers() {
    let catalog = CareerCatalog::new(vec![
        goal_career("n3", &["Law"], &[], "", false),
        goal_career("a4", &["Coding"], &["Technology"], "", false),
        goal_career("a6", &["Coding"], &[], "", false),
        goal_career("a1", &["Coding", "Tech"], &["Technology"], "$120k", true),
        goal_career("n1", &["Design"], &["Technology"], "", false),
        goal_career("a5", &["Coding Bootcamp"], &["Technology"], "", false),
        goal_career("n4", &["Biology"], &[], "$200k", false),
        goal_career("a2", &["Coding", "Tech"], &["Technology"], "$120k", false),
        goal_career("n2", &["Research"], &["Technology"], "", false),
        goal_career("a3", &["Coding", "Tech"], &["Technology"], "", false),
    ])
    .expect("catalog");
    let profile = Profile {
        stream: "Technology".to_string(),
        interests: labels(&["Coding"]),
        goals: labels(&["High Salary", "Remote Work", "Innovation"]),
        ..Profile::default()
    };

    let recommendations = pinned_engine(0).evaluate(Some(&profile), &catalog);

    assert_eq!(
        ids(&recommendations.ai_highlighted),
        vec!["a1", "a2", "a3", "a4", "a5"]
    );
    let scores: Vec<u8> = recommendations
        .ai_highlighted
        .iter()
        .map(|scored| scored.match_score)
        .collect();
    assert_eq!(scores, vec![62, 58, 54, 50, 40]);
    assert_eq!(ids(&recommendations.in_stream), vec!["n1", "n2"]);
    assert_eq!(ids(&recommendations.other), vec!["a6", "n4", "n3"]);
}

#[test]
fn strengths_only_careers_reach_lower_tiers() {
    let catalog = CareerCatalog::new(vec![
        career("manager", &["Business", "Management"], &["Commerce"]),
        career("publicist", &["Business"], &["Arts & Humanities"]),
        career("painter", &["Painting", "Art"], &["Arts & Humanities"]),
    ])
    .expect("catalog");
    let profile = Profile {
        stream: "Commerce".to_string(),
        interests: labels(&["Painting"]),
        strengths: labels(&["Communication"]),
        ..Profile::default()
    };

    let recommendations = pinned_engine(0).evaluate(Some(&profile), &catalog);

    assert_eq!(ids(&recommendations.ai_highlighted), vec!["painter"]);
    assert_eq!(ids(&recommendations.in_stream), vec!["manager"]);
    assert_eq!(recommendations.in_stream[0].raw_score, 18);
    assert_eq!(ids(&recommendations.other), vec!["publicist"]);
    assert_eq!(recommendations.other[0].match_score, 6);
}

#[test]
fn ties_keep_catalog_order() {
    let catalog = CareerCatalog::new(
        ["zeta", "alpha", "mid"]
            .into_iter()
            .map(|id| career(id, &["Coding"], &["Technology"]))
            .collect(),
    )
    .expect("catalog");
    let mut profile = Profile::new("Technology");
    profile.interests = labels(&["Coding"]);

    let recommendations = pinned_engine(0).evaluate(Some(&profile), &catalog);
    assert_eq!(ids(&recommendations.ai_highlighted), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn interest_tier_matches_in_either_direction() {
    let catalog = CareerCatalog::new(vec![career("game-dev", &["Game"], &[])]).expect("catalog");
    let mut profile = Profile::new("Commerce");
    profile.interests = labels(&["Game Development"]);

    let recommendations = pinned_engine(0).evaluate(Some(&profile), &catalog);
    assert_eq!(ids(&recommendations.ai_highlighted), vec!["game-dev"]);
}

#[test]
fn short_catalog_tag_pulls_career_into_interest_tier() {
    let mut profile = Profile::new("Commerce");
    profile.interests = labels(&["Data Science"]);

    let recommendations = pinned_engine(0).evaluate(Some(&profile), &bundled_catalog());

    assert_eq!(
        ids(&recommendations.ai_highlighted),
        vec!["data-scientist", "ai-engineer", "doctor"]
    );
    let doctor = &recommendations.ai_highlighted[2];
    assert_eq!(doctor.raw_score, 5);
    assert_eq!(doctor.match_score, 10);
    assert!(!ids(&recommendations.in_stream).contains(&"doctor"));
    assert!(!ids(&recommendations.other).contains(&"doctor"));
    assert_eq!(
        ids(&recommendations.in_stream),
        vec!["chartered-accountant", "lawyer"]
    );
}

#[test]
fn custom_limits_truncate_each_tier() {
    let engine = RecommendationEngine::new(
        pinned_scorer(0),
        TierLimits {
            ai_highlighted: 1,
            in_stream: 1,
            other: 0,
        },
    );
    let recommendations = engine.evaluate(Some(&math_profile()), &bundled_catalog());

    assert_eq!(ids(&recommendations.ai_highlighted), vec!["frontend-dev"]);
    assert_eq!(ids(&recommendations.in_stream), vec!["backend-dev"]);
    assert!(recommendations.other.is_empty());
}

#[test]
fn iteration_walks_tiers_in_display_order() {
    let recommendations = pinned_engine(0).evaluate(Some(&math_profile()), &bundled_catalog());
    let tiers: Vec<Tier> = recommendations.iter().map(|(tier, _)| tier).collect();

    assert_eq!(tiers.len(), recommendations.len());
    assert_eq!(tiers.first(), Some(&Tier::AiHighlighted));
    assert_eq!(tiers.last(), Some(&Tier::Other));
    assert_eq!(Tier::InStream.label(), "Standard Matches");
}

#[test]
fn default_engine_uses_built_in_rubric_and_limits() {
    let engine = RecommendationEngine::default();
    assert_eq!(
        engine.limits(),
        TierLimits {
            ai_highlighted: 5,
            in_stream: 3,
            other: 3,
        }
    );

    let config = engine.scorer().config();
    assert_eq!(config.max_score, 50);
    assert_eq!(config.percentage_cap, 99);
    assert_eq!(
        (config.stream_floor_threshold, config.stream_floor_base, config.stream_floor_span),
        (40, 45, 10)
    );
}
