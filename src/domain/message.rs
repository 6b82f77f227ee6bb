use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static DOMAIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([^\s<>]+)").expect("valid domain regex"));
static DISPLAY_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*"?([^"<]+)"?\s*<"#).expect("valid display name regex"));
static LOCAL_PART_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([^@<\s"]+)@"#).expect("valid local part regex"));

/// One message as handed over by the mailbox adapter. Missing headers are
/// represented as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedMessage {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub snippet: String,
}

impl NormalizedMessage {
    pub fn new(
        subject: impl Into<String>,
        body: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            sender: sender.into(),
            snippet: String::new(),
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    /// Lowercased host portion of the sender address, empty when absent.
    pub fn domain(&self) -> String {
        extract_domain(&self.sender)
    }

    pub fn sender_name(&self) -> String {
        extract_sender_name(&self.sender)
    }

    /// Body text used for matching: the decoded body, or the snippet when the
    /// body is empty.
    pub fn body_or_snippet(&self) -> &str {
        if self.body.is_empty() {
            &self.snippet
        } else {
            &self.body
        }
    }
}

pub fn extract_domain(sender: &str) -> String {
    DOMAIN_REGEX
        .captures(sender)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_default()
}

pub fn extract_sender_name(sender: &str) -> String {
    if sender.is_empty() {
        return String::new();
    }
    if let Some(name) = DISPLAY_NAME_REGEX
        .captures(sender)
        .and_then(|caps| caps.get(1))
    {
        let trimmed = name.as_str().trim();
        if !trimmed.is_empty() {
            return trimmed.to_lowercase();
        }
    }
    if let Some(local) = LOCAL_PART_REGEX
        .captures(sender)
        .and_then(|caps| caps.get(1))
    {
        return local
            .as_str()
            .chars()
            .map(|ch| if matches!(ch, '.' | '_' | '-') { ' ' } else { ch })
            .collect::<String>()
            .to_lowercase();
    }
    sender.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_domain_from_named_header() {
        assert_eq!(
            extract_domain("LeetCode <no-reply@LeetCode.com>"),
            "leetcode.com"
        );
        assert_eq!(extract_domain("bob@mail.example.org"), "mail.example.org");
        assert_eq!(extract_domain("bob@example.org other"), "example.org");
    }

    #[test]
    fn missing_domain_is_empty() {
        assert_eq!(extract_domain("no address here"), "");
        assert_eq!(extract_domain(""), "");
    }

    #[test]
    fn sender_name_prefers_display_name() {
        assert_eq!(
            extract_sender_name("\"The GitHub Team\" <noreply@github.com>"),
            "the github team"
        );
        assert_eq!(extract_sender_name("Swiggy <orders@swiggy.in>"), "swiggy");
    }

    #[test]
    fn sender_name_falls_back_to_local_part() {
        assert_eq!(extract_sender_name("john.doe_x-y@example.com"), "john doe x y");
        assert_eq!(extract_sender_name("<jobs.alert@naukri.com>"), "jobs alert");
    }

    #[test]
    fn sender_name_without_address_is_lowercased() {
        assert_eq!(extract_sender_name("Mystery Sender"), "mystery sender");
        assert_eq!(extract_sender_name(""), "");
    }

    #[test]
    fn body_falls_back_to_snippet() {
        let msg = NormalizedMessage::new("s", "", "a@b.c").with_snippet("preview");
        assert_eq!(msg.body_or_snippet(), "preview");
        let msg = NormalizedMessage::new("s", "full", "a@b.c").with_snippet("preview");
        assert_eq!(msg.body_or_snippet(), "full");
    }
}
