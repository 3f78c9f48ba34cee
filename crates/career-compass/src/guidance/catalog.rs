use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

const BUNDLED_CATALOG: &str = include_str!("../../data/careers.json");

/// Stable slug identifying a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CareerId(pub String);

impl CareerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CareerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CareerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

impl StressLevel {
    pub const fn label(self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Medium => "Medium",
            StressLevel::High => "High",
        }
    }
}

/// Degree path for a career; the postgraduate step is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub ug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pg: Option<String>,
}

/// One static catalog entry. Only `tags`, `stream`, `salary` and
/// `work_environment` feed the scorer; the rest is display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecord {
    pub id: CareerId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub stream: Vec<String>,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub growth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<StressLevel>,
    #[serde(default)]
    pub work_environment: String,
    #[serde(default)]
    pub roadmap: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub exams: Vec<String>,
    #[serde(default)]
    pub education: Education,
}

impl CareerRecord {
    /// Bare record carrying only an id; every other field empty.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: CareerId(id.into()),
            title: String::new(),
            description: String::new(),
            tags: Vec::new(),
            stream: Vec::new(),
            salary: String::new(),
            growth: String::new(),
            stress_level: None,
            work_environment: String::new(),
            roadmap: Vec::new(),
            skills: Vec::new(),
            tools: Vec::new(),
            exams: Vec::new(),
            education: Education::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read career catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid career catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("career record at position {position} has a blank id")]
    BlankId { position: usize },
    #[error("duplicate career id '{0}' in catalog")]
    DuplicateId(CareerId),
}

/// Read-only, ordered collection of careers with an id index.
#[derive(Debug, Clone, Default)]
pub struct CareerCatalog {
    records: Vec<CareerRecord>,
    index: HashMap<CareerId, usize>,
}

impl CareerCatalog {
    /// Assemble a catalog, enforcing unique non-blank ids.
    pub fn new(records: Vec<CareerRecord>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.id.0.trim().is_empty() {
                return Err(CatalogError::BlankId { position });
            }
            if index.insert(record.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self { records, index })
    }

    /// The catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_reader(BUNDLED_CATALOG.as_bytes())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "loading career catalog");
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let records: Vec<CareerRecord> = serde_json::from_reader(reader)?;
        Self::new(records)
    }

    pub fn get(&self, id: &CareerId) -> Option<&CareerRecord> {
        self.index.get(id).map(|position| &self.records[*position])
    }

    /// Records in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, CareerRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[CareerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a CareerCatalog {
    type Item = &'a CareerRecord;
    type IntoIter = std::slice::Iter<'a, CareerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
