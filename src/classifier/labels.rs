/// Mailbox label names that are never offered to the remote model.
pub const RESERVED_LABELS: &[&str] = &[
    "INBOX",
    "SENT",
    "DRAFT",
    "SPAM",
    "TRASH",
    "STARRED",
    "IMPORTANT",
    "UNREAD",
];

/// Known mailbox labels for one organize run. Owned by the caller and passed
/// into every classification so remote models can reuse existing names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelContext {
    labels: Vec<String>,
}

impl LabelContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ctx = Self::new();
        ctx.set_existing_labels(labels);
        ctx
    }

    /// Replaces the known labels, dropping system labels and duplicates.
    pub fn set_existing_labels<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.clear();
        for label in labels {
            let label = label.into();
            if RESERVED_LABELS.contains(&label.as_str()) {
                continue;
            }
            self.remember(&label);
        }
    }

    /// Adds `label` unless it is already known. Returns whether it was added.
    pub fn remember(&mut self, label: &str) -> bool {
        if label.is_empty() || self.contains(label) {
            return false;
        }
        self.labels.push(label.to_string());
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|known| known == label)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
