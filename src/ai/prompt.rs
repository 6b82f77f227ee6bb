use crate::{classifier::labels::LabelContext, domain::NormalizedMessage};

const BODY_PREVIEW_CHARS: usize = 1_500;

pub fn build_prompt(message: &NormalizedMessage, labels: &LabelContext) -> String {
    let body_preview: String = message
        .body_or_snippet()
        .chars()
        .take(BODY_PREVIEW_CHARS)
        .collect();

    let known_labels = if labels.is_empty() {
        String::new()
    } else {
        format!(
            "\n\nLabels that already exist in the mailbox (reuse one when it fits):\n{}",
            labels.labels().join(", ")
        )
    };

    format!(
        r#"You sort email into folders. Read the message below and choose the single best label.

Rules:
- Prefer specific labels such as "Job Applications", "Online Courses", "Hackathons" or "Finance".
- Recognise well-known senders: LeetCode -> "Coding Practice", IEEE -> "Academic/Research", NPTEL -> "Online Courses".
- Write labels in Title Case, two or three words at most.
- Report high confidence only when the choice is clear.

MESSAGE:
FROM: {sender}
DOMAIN: {domain}
SUBJECT: {subject}
BODY: {body_preview}{known_labels}

Answer with JSON only:
{{"category": "Label Name", "confidence": 0.95, "reasoning": "short reason", "alternative_categories": ["Other"]}}"#,
        sender = message.sender,
        domain = message.domain(),
        subject = message.subject,
    )
}
