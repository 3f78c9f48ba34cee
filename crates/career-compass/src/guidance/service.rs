use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::assistant::{AssistantError, AssistantReply, CareerAssistant, ChatMessage};
use super::catalog::{CareerCatalog, CareerId, CareerRecord};
use super::profile::{Profile, ProfileViolation};
use super::questionnaire::{questionnaire, QuestionnaireStepView};
use super::ranking::{RecommendationEngine, Recommendations};
use super::report::RecommendationReport;
use super::store::{ProfileStore, SavedProfile, StoreError};

/// Service composing the catalog, recommendation engine, profile store and assistant.
pub struct GuidanceService<S> {
    catalog: Arc<CareerCatalog>,
    engine: Arc<RecommendationEngine>,
    store: Arc<S>,
    assistant: Arc<CareerAssistant>,
}

impl<S> GuidanceService<S>
where
    S: ProfileStore + 'static,
{
    pub fn new(catalog: CareerCatalog, store: Arc<S>) -> Self {
        Self::with_components(
            catalog,
            RecommendationEngine::default(),
            store,
            CareerAssistant::default(),
        )
    }

    pub fn with_components(
        catalog: CareerCatalog,
        engine: RecommendationEngine,
        store: Arc<S>,
        assistant: CareerAssistant,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            engine: Arc::new(engine),
            store,
            assistant: Arc::new(assistant),
        }
    }

    pub fn catalog(&self) -> &CareerCatalog {
        &self.catalog
    }

    pub fn questionnaire(&self) -> Vec<QuestionnaireStepView> {
        questionnaire()
    }

    /// Validate a completed assessment and persist it, replacing any earlier one.
    pub fn save_profile(&self, profile: &Profile) -> Result<SavedProfile, GuidanceServiceError> {
        profile.validate()?;
        let saved = self.store.save(profile)?;
        info!(stream = %profile.stream, "stored completed assessment");
        Ok(saved)
    }

    pub fn saved_profile(&self) -> Result<Option<SavedProfile>, GuidanceServiceError> {
        Ok(self.store.load()?)
    }

    /// Forget the stored assessment so the questionnaire starts over.
    pub fn reset_profile(&self) -> Result<(), GuidanceServiceError> {
        self.store.clear()?;
        info!("cleared stored assessment");
        Ok(())
    }

    pub fn recommend(&self, profile: Option<&Profile>) -> Recommendations {
        self.engine.evaluate(profile, &self.catalog)
    }

    /// Recommendations for the stored assessment; empty when none is saved.
    pub fn stored_recommendations(&self) -> Result<Recommendations, GuidanceServiceError> {
        let saved = self.store.load()?;
        Ok(self.recommend(saved.as_ref().map(|saved| &saved.profile)))
    }

    pub fn report(&self, profile: &Profile, generated_on: NaiveDate) -> RecommendationReport {
        let recommendations = self.recommend(Some(profile));
        RecommendationReport::build(profile, &recommendations, generated_on)
    }

    pub fn career(&self, id: &CareerId) -> Result<&CareerRecord, GuidanceServiceError> {
        self.catalog
            .get(id)
            .ok_or_else(|| GuidanceServiceError::CareerNotFound(id.clone()))
    }

    pub fn chat(
        &self,
        history: &[ChatMessage],
        profile: Option<&Profile>,
    ) -> Result<AssistantReply, GuidanceServiceError> {
        Ok(self.assistant.reply(history, profile, &self.catalog)?)
    }
}

/// Error raised by the guidance service.
#[derive(Debug, thiserror::Error)]
pub enum GuidanceServiceError {
    #[error(transparent)]
    Profile(#[from] ProfileViolation),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Assistant(#[from] AssistantError),
    #[error("career '{0}' not found")]
    CareerNotFound(CareerId),
}
