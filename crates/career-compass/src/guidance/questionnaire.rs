use serde::Serialize;

/// The five steps of the assessment, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireStep {
    Stream,
    Interests,
    Strengths,
    Weaknesses,
    Goals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    Single,
    /// Multi-select grouped under expandable interest categories.
    Nested,
    Multi,
}

impl QuestionnaireStep {
    pub fn ordered() -> [QuestionnaireStep; 5] {
        [
            QuestionnaireStep::Stream,
            QuestionnaireStep::Interests,
            QuestionnaireStep::Strengths,
            QuestionnaireStep::Weaknesses,
            QuestionnaireStep::Goals,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            QuestionnaireStep::Stream => "stream",
            QuestionnaireStep::Interests => "interests",
            QuestionnaireStep::Strengths => "strengths",
            QuestionnaireStep::Weaknesses => "weaknesses",
            QuestionnaireStep::Goals => "goals",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            QuestionnaireStep::Stream => "Select your Stream",
            QuestionnaireStep::Interests => "Explore Your Interests",
            QuestionnaireStep::Strengths => "What are your strengths?",
            QuestionnaireStep::Weaknesses => "Any challenges?",
            QuestionnaireStep::Goals => "What are your goals?",
        }
    }

    pub const fn subtitle(self) -> &'static str {
        match self {
            QuestionnaireStep::Stream => {
                "What is your current or preferred academic background?"
            }
            QuestionnaireStep::Interests => {
                "Dive into categories to find specific niches that excite you."
            }
            QuestionnaireStep::Strengths => {
                "Things you are naturally good at or have experience in."
            }
            QuestionnaireStep::Weaknesses => {
                "Areas you struggle with or want to avoid (optional)."
            }
            QuestionnaireStep::Goals => "What do you want to achieve in your career?",
        }
    }

    pub const fn kind(self) -> SelectionKind {
        match self {
            QuestionnaireStep::Stream => SelectionKind::Single,
            QuestionnaireStep::Interests => SelectionKind::Nested,
            QuestionnaireStep::Strengths
            | QuestionnaireStep::Weaknesses
            | QuestionnaireStep::Goals => SelectionKind::Multi,
        }
    }

    pub const fn is_optional(self) -> bool {
        matches!(self, QuestionnaireStep::Weaknesses)
    }

    /// Flat option list for the step; interests are the union of every
    /// category's sub-options.
    pub fn options(self) -> Vec<&'static str> {
        match self {
            QuestionnaireStep::Stream => STREAMS.to_vec(),
            QuestionnaireStep::Interests => INTEREST_CATEGORIES
                .iter()
                .flat_map(|category| category.sub_options.iter().copied())
                .collect(),
            QuestionnaireStep::Strengths => STRENGTHS.to_vec(),
            QuestionnaireStep::Weaknesses => WEAKNESSES.to_vec(),
            QuestionnaireStep::Goals => GOALS.to_vec(),
        }
    }
}

pub const STREAMS: &[&str] = &[
    "Science (Math)",
    "Science (Bio)",
    "Commerce",
    "Arts & Humanities",
    "Technology",
];

pub const STRENGTHS: &[&str] = &[
    "Logic & Math",
    "Visual Creativity",
    "Communication",
    "Leadership",
    "Problem Solving",
    "Attention to Detail",
    "Strategic Thinking",
    "Empathy",
    "Technical Troubleshooting",
    "Persuasion",
    "Memorization",
    "Physical Endurance",
];

pub const WEAKNESSES: &[&str] = &[
    "Public Speaking",
    "Repetitive Tasks",
    "High Pressure",
    "Complex Math",
    "Managing Others",
    "Abstract Theory",
    "Blood/Medical Procedures",
];

pub const GOALS: &[&str] = &[
    "High Salary",
    "Work Life Balance",
    "Remote Work",
    "Innovation",
    "Social Impact",
    "Job Security",
    "Leadership Role",
    "Creative Freedom",
];

/// Group of related interests offered together on the interests step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterestCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub recommended_streams: &'static [&'static str],
    pub sub_options: &'static [&'static str],
}

impl InterestCategory {
    /// A category is recommended when the first word of one of its streams
    /// appears in the selected stream ("Science" covers both science streams).
    pub fn recommended_for(&self, stream: &str) -> bool {
        self.recommended_streams.iter().any(|recommended| {
            recommended
                .split(' ')
                .next()
                .map(|word| stream.contains(word))
                .unwrap_or(false)
        })
    }
}

pub const INTEREST_CATEGORIES: &[InterestCategory] = &[
    InterestCategory {
        id: "tech",
        label: "Technology & Code",
        description: "Building the digital future.",
        recommended_streams: &["Science (Math)", "Technology"],
        sub_options: &[
            "Web Development",
            "Mobile Apps",
            "Artificial Intelligence",
            "Cybersecurity",
            "Cloud Computing",
            "Game Development",
            "DevOps",
            "Data Science",
            "Blockchain",
            "IoT Development",
            "AR/VR Development",
            "Robotics",
            "Quantum Computing",
        ],
    },
    InterestCategory {
        id: "business",
        label: "Business & Finance",
        description: "Strategy, money, and markets.",
        recommended_streams: &["Commerce", "Science (Math)"],
        sub_options: &[
            "Investment Banking",
            "Digital Marketing",
            "Entrepreneurship",
            "Management",
            "Accounting",
            "Finance",
            "Business Analytics",
            "E-commerce",
            "Product Management",
            "Consulting",
            "Real Estate",
            "Supply Chain Management",
        ],
    },
    InterestCategory {
        id: "creative",
        label: "Creative & Design",
        description: "Visuals, user experience, and art.",
        recommended_streams: &["Arts & Humanities", "Technology"],
        sub_options: &[
            "UI/UX Design",
            "Visual Design",
            "Content Creation",
            "Animation",
            "Architecture",
            "Fashion Design",
            "Interior Design",
            "Photography",
            "Video Production",
            "Brand Strategy",
            "Motion Graphics",
            "Industrial Design",
        ],
    },
    InterestCategory {
        id: "science",
        label: "Science & Healthcare",
        description: "Healing, researching, and discovering.",
        recommended_streams: &["Science (Bio)", "Science (Math)"],
        sub_options: &[
            "Medical",
            "Biotechnology",
            "Psychology",
            "Environmental Science",
            "Research",
            "Pharmacy",
            "Nursing",
            "Genetics",
            "Neuroscience",
            "Public Health",
            "Veterinary Science",
            "Nutrition",
        ],
    },
    InterestCategory {
        id: "law",
        label: "Law & Humanities",
        description: "Justice, society, and policy.",
        recommended_streams: &["Arts & Humanities", "Commerce"],
        sub_options: &[
            "Law",
            "Policy Making",
            "Social Work",
            "Journalism",
            "International Relations",
            "Political Science",
            "Human Rights",
            "Education",
            "Philosophy",
            "History",
            "Linguistics",
        ],
    },
    InterestCategory {
        id: "engineering",
        label: "Engineering & Manufacturing",
        description: "Building and innovating physical systems.",
        recommended_streams: &["Science (Math)", "Technology"],
        sub_options: &[
            "Mechanical Engineering",
            "Electrical Engineering",
            "Civil Engineering",
            "Aerospace Engineering",
            "Chemical Engineering",
            "Automotive Engineering",
            "Manufacturing",
            "Industrial Engineering",
        ],
    },
];

/// Interest categories to offer for a stream. Everything is shown when no
/// stream is selected yet or the user asked to explore all categories.
pub fn interest_categories_for(stream: &str, show_all: bool) -> Vec<&'static InterestCategory> {
    INTEREST_CATEGORIES
        .iter()
        .filter(|category| show_all || stream.is_empty() || category.recommended_for(stream))
        .collect()
}

/// Serializable description of one step for API clients.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireStepView {
    pub step: QuestionnaireStep,
    pub key: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub kind: SelectionKind,
    pub optional: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<&'static InterestCategory>,
}

pub fn questionnaire() -> Vec<QuestionnaireStepView> {
    QuestionnaireStep::ordered()
        .into_iter()
        .map(|step| {
            let (options, categories) = match step.kind() {
                SelectionKind::Nested => (Vec::new(), INTEREST_CATEGORIES.iter().collect()),
                _ => (step.options(), Vec::new()),
            };
            QuestionnaireStepView {
                step,
                key: step.key(),
                title: step.title(),
                subtitle: step.subtitle(),
                kind: step.kind(),
                optional: step.is_optional(),
                options,
                categories,
            }
        })
        .collect()
}
