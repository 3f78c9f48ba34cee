use serde::{Deserialize, Serialize};

use super::matching::same_label;
use super::questionnaire::{QuestionnaireStep, SelectionKind};

/// Questionnaire answers: one stream plus four independent label sets.
///
/// Every field defaults to empty so partially answered assessments still
/// deserialize; the scorer treats missing answers as zero contribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub stream: String,
    pub interests: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub goals: Vec<String>,
}

/// Reasons a questionnaire step cannot be completed yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileViolation {
    #[error("no stream selected")]
    MissingStream,
    #[error("{} requires at least one selection", .0.title())]
    EmptySelection(QuestionnaireStep),
}

impl Profile {
    pub fn new(stream: impl Into<String>) -> Self {
        Self {
            stream: stream.into(),
            ..Self::default()
        }
    }

    pub fn selections(&self, step: QuestionnaireStep) -> &[String] {
        match step {
            QuestionnaireStep::Stream => std::slice::from_ref(&self.stream),
            QuestionnaireStep::Interests => &self.interests,
            QuestionnaireStep::Strengths => &self.strengths,
            QuestionnaireStep::Weaknesses => &self.weaknesses,
            QuestionnaireStep::Goals => &self.goals,
        }
    }

    fn selections_mut(&mut self, step: QuestionnaireStep) -> Option<&mut Vec<String>> {
        match step {
            QuestionnaireStep::Stream => None,
            QuestionnaireStep::Interests => Some(&mut self.interests),
            QuestionnaireStep::Strengths => Some(&mut self.strengths),
            QuestionnaireStep::Weaknesses => Some(&mut self.weaknesses),
            QuestionnaireStep::Goals => Some(&mut self.goals),
        }
    }

    /// Apply one click of the questionnaire: single-select steps replace the
    /// answer, multi-select steps toggle membership.
    pub fn toggle(&mut self, step: QuestionnaireStep, option: &str) {
        if step.kind() == SelectionKind::Single {
            self.stream = option.to_string();
            return;
        }

        if let Some(list) = self.selections_mut(step) {
            if let Some(position) = list.iter().position(|entry| same_label(entry, option)) {
                list.remove(position);
            } else {
                list.push(option.to_string());
            }
        }
    }

    pub fn validate_step(&self, step: QuestionnaireStep) -> Result<(), ProfileViolation> {
        if step.is_optional() {
            return Ok(());
        }

        match step {
            QuestionnaireStep::Stream if self.stream.trim().is_empty() => {
                Err(ProfileViolation::MissingStream)
            }
            QuestionnaireStep::Stream => Ok(()),
            other => {
                let answered = self
                    .selections(other)
                    .iter()
                    .any(|entry| !entry.trim().is_empty());
                if answered {
                    Ok(())
                } else {
                    Err(ProfileViolation::EmptySelection(other))
                }
            }
        }
    }

    /// Check every step in questionnaire order, reporting the first gap.
    pub fn validate(&self) -> Result<(), ProfileViolation> {
        QuestionnaireStep::ordered()
            .into_iter()
            .try_for_each(|step| self.validate_step(step))
    }

    /// Progress meter shown while answering: 20 for a stream plus 10 per
    /// interest, strength and goal, capped at 100.
    pub fn completeness(&self) -> u8 {
        let stream = if self.stream.trim().is_empty() { 0 } else { 20 };
        let answers = self.interests.len() + self.strengths.len() + self.goals.len();
        let total = stream + answers.saturating_mul(10);
        total.min(100) as u8
    }
}
