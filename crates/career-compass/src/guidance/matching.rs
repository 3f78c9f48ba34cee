//! Label comparison helpers shared by scoring and tiering.

/// Trimmed, lowercased form used for every label comparison.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Case-insensitive equality. Blank labels never match anything.
pub fn same_label(a: &str, b: &str) -> bool {
    let a = normalize_label(a);
    let b = normalize_label(b);
    !a.is_empty() && a == b
}

/// Either label contains the other, ignoring case. Blank labels never match,
/// otherwise the empty string would be a substring of every tag.
pub fn loosely_matches(a: &str, b: &str) -> bool {
    let a = normalize_label(a);
    let b = normalize_label(b);
    normalized_loose_match(&a, &b)
}

fn normalized_loose_match(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}

/// Trimmed labels with blanks and case-insensitive repeats removed.
/// Keeps the first spelling seen.
pub fn distinct_labels(labels: &[String]) -> Vec<&str> {
    let mut seen = Vec::new();
    let mut distinct = Vec::new();
    for label in labels {
        let normalized = normalize_label(label);
        if normalized.is_empty() || seen.contains(&normalized) {
            continue;
        }
        seen.push(normalized);
        distinct.push(label.trim());
    }
    distinct
}

/// Deduplicated set of normalized labels, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Vec::new();
        for label in labels {
            let normalized = normalize_label(label.as_ref());
            if !normalized.is_empty() && !set.contains(&normalized) {
                set.push(normalized);
            }
        }
        Self { labels: set }
    }

    pub fn contains(&self, label: &str) -> bool {
        let needle = normalize_label(label);
        self.labels.iter().any(|entry| *entry == needle)
    }

    pub fn contains_any(&self, labels: &[&str]) -> bool {
        labels.iter().any(|label| self.contains(label))
    }

    /// Whether `label` loosely matches at least one member.
    pub fn loosely_contains(&self, label: &str) -> bool {
        let needle = normalize_label(label);
        self.labels
            .iter()
            .any(|entry| normalized_loose_match(entry, &needle))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_match_works_in_both_directions() {
        assert!(loosely_matches("Game Development", "game"));
        assert!(loosely_matches("Design", "UI/UX Design"));
        assert!(!loosely_matches("Law", "Medical"));
    }

    #[test]
    fn blank_labels_never_match() {
        assert!(!loosely_matches("", "Tech"));
        assert!(!loosely_matches("Tech", "   "));
        assert!(!same_label("", ""));
    }

    #[test]
    fn same_label_ignores_case_and_padding() {
        assert!(same_label(" web development ", "Web Development"));
        assert!(!same_label("Web", "Web Development"));
    }

    #[test]
    fn distinct_labels_keep_first_spelling() {
        let raw: Vec<String> = ["  Coding ", "", "coding", "Tech", "TECH "]
            .iter()
            .map(|label| label.to_string())
            .collect();
        assert_eq!(distinct_labels(&raw), vec!["Coding", "Tech"]);
    }

    #[test]
    fn label_set_deduplicates_case_insensitively() {
        let set = LabelSet::from_labels(["Coding", "coding", " CODING ", "", "Tech"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["coding", "tech"]);
        assert!(set.contains("TECH"));
        assert!(set.contains_any(&["Math", "Coding"]));
        assert!(set.loosely_contains("Tech Support"));
        assert!(!set.loosely_contains(""));
    }
}
