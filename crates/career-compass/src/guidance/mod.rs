//! Career guidance: questionnaire, catalog scoring, tiered recommendations,
//! printable reports and the catalog-grounded assistant.

pub mod assistant;
pub mod catalog;
pub mod matching;
pub mod profile;
pub mod questionnaire;
pub mod ranking;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use assistant::{
    best_match, AssistantError, AssistantReply, CareerAssistant, ChatMessage, ChatPrompt,
    ChatRole, CompletionBackend, OfflineBackend, ReplySource,
};
pub use catalog::{CareerCatalog, CareerId, CareerRecord, CatalogError, Education, StressLevel};
pub use profile::{Profile, ProfileViolation};
pub use questionnaire::{questionnaire, QuestionnaireStep, SelectionKind};
pub use ranking::{RecommendationEngine, Recommendations, Tier, TierLimits};
pub use report::RecommendationReport;
pub use router::guidance_router;
pub use scoring::{
    CareerScorer, FixedFloorOffset, FloorOffset, RandomFloorOffset, ScoreComponent, ScoreFactor,
    ScoredCareer, ScoringConfig,
};
pub use service::{GuidanceService, GuidanceServiceError};
pub use store::{FileProfileStore, InMemoryProfileStore, ProfileStore, SavedProfile, StoreError};
