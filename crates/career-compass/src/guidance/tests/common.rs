use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::guidance::catalog::{CareerCatalog, CareerRecord};
use crate::guidance::profile::Profile;
use crate::guidance::ranking::{RecommendationEngine, TierLimits};
use crate::guidance::scoring::{CareerScorer, FixedFloorOffset, ScoredCareer, ScoringConfig};
use crate::guidance::service::GuidanceService;
use crate::guidance::store::{InMemoryProfileStore, ProfileStore, SavedProfile, StoreError};
use crate::guidance::{guidance_router, CareerAssistant};

pub(super) fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn career(id: &str, tags: &[&str], streams: &[&str]) -> CareerRecord {
    let mut record = CareerRecord::new(id);
    record.title = id.replace('-', " ");
    record.tags = labels(tags);
    record.stream = labels(streams);
    record
}

pub(super) fn frontend_dev() -> CareerRecord {
    let mut record = career(
        "frontend-dev",
        &["Web Development", "Visual Design", "Coding", "Tech"],
        &["Science (Math)", "Technology", "Arts & Humanities"],
    );
    record.salary = "$75k - $160k".to_string();
    record
}

pub(super) fn pinned_scorer(offset: u8) -> CareerScorer {
    CareerScorer::with_floor_offset(ScoringConfig::default(), Arc::new(FixedFloorOffset(offset)))
}

pub(super) fn pinned_engine(offset: u8) -> RecommendationEngine {
    RecommendationEngine::new(pinned_scorer(offset), TierLimits::default())
}

pub(super) fn bundled_catalog() -> CareerCatalog {
    CareerCatalog::bundled().expect("bundled catalog loads")
}

pub(super) fn math_profile() -> Profile {
    Profile {
        stream: "Science (Math)".to_string(),
        interests: labels(&["Web Development", "Artificial Intelligence"]),
        strengths: labels(&["Logic & Math"]),
        weaknesses: labels(&["Public Speaking"]),
        goals: labels(&["High Salary", "Remote Work"]),
    }
}

pub(super) fn commerce_profile() -> Profile {
    Profile {
        stream: "Commerce".to_string(),
        interests: labels(&["Law"]),
        strengths: labels(&["Communication"]),
        weaknesses: Vec::new(),
        goals: labels(&["Innovation"]),
    }
}

pub(super) fn ids(careers: &[ScoredCareer]) -> Vec<&str> {
    careers.iter().map(|scored| scored.career.id.as_str()).collect()
}

pub(super) fn build_service() -> (
    GuidanceService<InMemoryProfileStore>,
    Arc<InMemoryProfileStore>,
) {
    let store = Arc::new(InMemoryProfileStore::default());
    let service = GuidanceService::with_components(
        bundled_catalog(),
        pinned_engine(0),
        store.clone(),
        CareerAssistant::default(),
    );
    (service, store)
}

pub(super) fn router_with_service(service: GuidanceService<InMemoryProfileStore>) -> axum::Router {
    guidance_router(Arc::new(service))
}

pub(super) struct UnavailableStore;

impl ProfileStore for UnavailableStore {
    fn save(&self, _profile: &Profile) -> Result<SavedProfile, StoreError> {
        Err(StoreError::Io(std::io::Error::other("disk offline")))
    }

    fn load(&self) -> Result<Option<SavedProfile>, StoreError> {
        Err(StoreError::Io(std::io::Error::other("disk offline")))
    }

    fn clear(&self) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::other("disk offline")))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
