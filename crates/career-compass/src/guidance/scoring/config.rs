/// Weights and normalization constants for the match rubric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    pub stream_match: u32,
    pub interest_exact: u32,
    pub interest_partial: u32,
    pub strength_exact: u32,
    pub strength_context: u32,
    pub goal_alignment: u32,
    /// Raw score that maps to 100%.
    pub max_score: u32,
    pub percentage_cap: u8,
    /// In-stream careers below this percentage are lifted into the floor band.
    pub stream_floor_threshold: u8,
    pub stream_floor_base: u8,
    /// Width of the floor band; offsets are drawn from `0..span`.
    pub stream_floor_span: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            stream_match: 15,
            interest_exact: 10,
            interest_partial: 5,
            strength_exact: 3,
            strength_context: 3,
            goal_alignment: 2,
            max_score: 50,
            percentage_cap: 99,
            stream_floor_threshold: 40,
            stream_floor_base: 45,
            stream_floor_span: 10,
        }
    }
}
