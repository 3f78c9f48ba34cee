//! Career recommendation engine: scores a static career catalog against a
//! questionnaire profile and ranks the results into three tiers.

pub mod config;
pub mod error;
pub mod guidance;
pub mod telemetry;
