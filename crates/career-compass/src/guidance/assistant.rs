//! Career Q&A chat: local catalog search feeding an optional completion
//! backend, with an offline answer built from catalog data.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::catalog::{CareerCatalog, CareerId, CareerRecord};
use super::profile::Profile;

pub const GREETING: &str = "Hi! I'm your personal Career AI. Based on your profile, I can help \
you explore these paths further, suggest courses, or answer any career questions. What's on your mind?";

pub const OFFLINE_APOLOGY: &str = "I'm having trouble connecting to my brain right now, but I can \
tell you about many careers like Engineering, Law, Medicine, or Design. Try asking 'Tell me about [Career Name]'.";

const PERSONA: &str = "You are a friendly and helpful Career Counselor.\n\
Your goal is to help students find their dream career.\n\
Keep your answers concise (under 100 words) and encouraging.";

const GENERAL_CONTEXT: &str = "CONTEXT: The user's query is general.\n\
You have access to a database of careers including Engineering, Medical, Arts, and Business.\n\
If they ask for options, suggest checking the \"Results\" section for a full list.";

/// Minimum search score before a career is treated as the subject.
pub const MATCH_THRESHOLD: u32 = 20;

const TITLE_POINTS: u32 = 100;
const TITLE_WORD_POINTS: u32 = 40;
const ID_POINTS: u32 = 30;
const TAG_POINTS: u32 = 25;
const TAG_WORD_POINTS: u32 = 10;
const ALIAS_POINTS: u32 = 50;
const SIGNIFICANT_WORD_LEN: usize = 3;

/// Careers reachable through words that appear in neither title nor tags.
const KEYWORD_ALIASES: &[(&str, &[&str])] =
    &[("startup-founder", &["startup", "founder", "entrepreneur"])];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }

    pub fn greeting() -> Self {
        Self::assistant(GREETING)
    }
}

/// Instruction-formatted prompt handed to a completion backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub question: String,
    pub rendered: String,
}

impl ChatPrompt {
    pub fn new(system: impl Into<String>, question: impl Into<String>) -> Self {
        let system = system.into();
        let question = question.into();
        let rendered = format!("<s>[INST] {system}\n\nUser Question: {question} [/INST]");
        Self {
            system,
            question,
            rendered,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("conversation has no user question")]
    EmptyConversation,
    #[error("completion backend failed: {0}")]
    Backend(String),
    #[error("failed to encode profile context: {0}")]
    ProfileContext(#[from] serde_json::Error),
}

/// Text generation seam. `Ok(None)` means no answer was produced.
pub trait CompletionBackend: Send + Sync {
    fn complete(&self, prompt: &ChatPrompt) -> Result<Option<String>, AssistantError>;
}

/// Backend used when no model is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineBackend;

impl CompletionBackend for OfflineBackend {
    fn complete(&self, _prompt: &ChatPrompt) -> Result<Option<String>, AssistantError> {
        Ok(None)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CareerMatch<'a> {
    pub career: &'a CareerRecord,
    pub score: u32,
}

fn significant_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ')
        .filter(|word| word.chars().count() > SIGNIFICANT_WORD_LEN)
}

fn search_score(query: &str, career: &CareerRecord) -> u32 {
    let mut score = 0;

    let title = career.title.trim().to_lowercase();
    if !title.is_empty() && query.contains(&title) {
        score += TITLE_POINTS;
    }
    score += significant_words(&title)
        .filter(|word| query.contains(word))
        .count() as u32
        * TITLE_WORD_POINTS;

    let spaced_id = career.id.as_str().trim().replace('-', " ").to_lowercase();
    if !spaced_id.is_empty() && query.contains(&spaced_id) {
        score += ID_POINTS;
    }

    for tag in &career.tags {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() {
            continue;
        }
        if query.contains(&tag) {
            score += TAG_POINTS;
        }
        score += significant_words(&tag)
            .filter(|word| query.contains(word))
            .count() as u32
            * TAG_WORD_POINTS;
    }

    for (career_id, keywords) in KEYWORD_ALIASES {
        if career.id.as_str() == *career_id && keywords.iter().any(|keyword| query.contains(keyword))
        {
            score += ALIAS_POINTS;
        }
    }

    score
}

/// Career whose title, id or tags best cover `query`; first wins on ties.
pub fn best_match<'a>(query: &str, catalog: &'a CareerCatalog) -> Option<CareerMatch<'a>> {
    let query = query.to_lowercase();
    let mut best: Option<CareerMatch<'a>> = None;

    for career in catalog {
        let score = search_score(&query, career);
        let improves = match &best {
            Some(current) => score > current.score,
            None => score > 0,
        };
        if improves {
            best = Some(CareerMatch { career, score });
        }
    }

    best
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    Backend,
    Catalog,
    Apology,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantReply {
    pub message: ChatMessage,
    pub source: ReplySource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_id: Option<CareerId>,
}

#[derive(Clone)]
pub struct CareerAssistant {
    backend: Arc<dyn CompletionBackend>,
}

impl std::fmt::Debug for CareerAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CareerAssistant").finish_non_exhaustive()
    }
}

impl Default for CareerAssistant {
    fn default() -> Self {
        Self::new(Arc::new(OfflineBackend))
    }
}

impl CareerAssistant {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Build the counselor prompt for `question`, grounded on `subject` when present.
    pub fn prompt(
        &self,
        question: &str,
        subject: Option<&CareerRecord>,
        profile: Option<&Profile>,
    ) -> Result<ChatPrompt, AssistantError> {
        let mut system = PERSONA.to_string();
        system.push_str("\n\n");
        match subject {
            Some(career) => system.push_str(&format!(
                "CONTEXT: The user is asking about \"{}\".\n\
                 Here is the verified data you MUST use:\n\
                 - Description: {}\n\
                 - Salary: {}\n\
                 - Growth: {}\n\
                 - Roadmap: {}\n\n\
                 Use this data to answer the user's question. Do not make up facts if they contradict this data.",
                career.title,
                career.description,
                career.salary,
                career.growth,
                career.roadmap.join(", ")
            )),
            None => system.push_str(GENERAL_CONTEXT),
        }

        if let Some(profile) = profile {
            let encoded = serde_json::to_string(profile)?;
            system.push_str(&format!("\n\nSTUDENT PROFILE: {encoded}"));
        }

        Ok(ChatPrompt::new(system, question))
    }

    /// Answer the latest user message in `history`.
    pub fn reply(
        &self,
        history: &[ChatMessage],
        profile: Option<&Profile>,
        catalog: &CareerCatalog,
    ) -> Result<AssistantReply, AssistantError> {
        let question = history
            .iter()
            .rev()
            .find(|message| message.role == ChatRole::User)
            .map(|message| message.content.trim())
            .filter(|content| !content.is_empty())
            .ok_or(AssistantError::EmptyConversation)?;

        let subject = best_match(question, catalog)
            .filter(|found| found.score >= MATCH_THRESHOLD)
            .map(|found| found.career);
        debug!(
            career = subject.map(|career| career.id.as_str()),
            "resolved assistant subject"
        );

        let prompt = self.prompt(question, subject, profile)?;
        let career_id = subject.map(|career| career.id.clone());

        match self.backend.complete(&prompt) {
            Ok(Some(text)) => {
                if let Some(answer) = clean_completion(&text, &prompt) {
                    return Ok(AssistantReply {
                        message: ChatMessage::assistant(answer),
                        source: ReplySource::Backend,
                        career_id,
                    });
                }
            }
            Ok(None) => {}
            Err(error) => warn!(error = %error, "completion backend failed, answering offline"),
        }

        Ok(match subject {
            Some(career) => AssistantReply {
                message: ChatMessage::assistant(offline_summary(career)),
                source: ReplySource::Catalog,
                career_id,
            },
            None => AssistantReply {
                message: ChatMessage::assistant(OFFLINE_APOLOGY),
                source: ReplySource::Apology,
                career_id: None,
            },
        })
    }
}

fn clean_completion(text: &str, prompt: &ChatPrompt) -> Option<String> {
    let without_prompt = text.replace(&prompt.rendered, "");
    let trimmed = without_prompt.trim();
    let answer = trimmed.strip_suffix("</s>").unwrap_or(trimmed).trim();
    (!answer.is_empty()).then(|| answer.to_string())
}

fn offline_summary(career: &CareerRecord) -> String {
    let mut summary = format!(
        "**{}**\n\n{}\n\n**Salary:** {}\n**Growth:** {}",
        career.title, career.description, career.salary, career.growth
    );
    if let Some(first_step) = career.roadmap.first() {
        summary.push_str(&format!("\n**Roadmap:** {first_step}"));
    }
    summary
}
