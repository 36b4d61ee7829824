//! Idea records and idea-list payload parsing

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Title shown for a record whose `idea` field is empty
pub const UNTITLED_IDEA: &str = "Untitled idea";

/// A single startup idea: a title plus an optional description.
///
/// Records are immutable once created. Two records are considered the same
/// favorite when their `idea` fields match exactly; see [`IdeaRecord::same_idea`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaRecord {
    /// Display title, empty when absent
    #[serde(default, deserialize_with = "null_as_empty")]
    pub idea: String,

    /// Longer description, empty when absent
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summary: String,
}

impl IdeaRecord {
    pub fn new(idea: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            idea: idea.into(),
            summary: summary.into(),
        }
    }

    /// Build a user-entered idea from raw input text.
    ///
    /// Returns `None` when the text is empty after trimming.
    pub fn custom(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self::new(trimmed, ""))
    }

    /// Title to display, substituting a placeholder for empty titles
    pub fn title(&self) -> &str {
        if self.idea.is_empty() {
            UNTITLED_IDEA
        } else {
            &self.idea
        }
    }

    /// Whether this record and `other` share the same `idea` title
    pub fn same_idea(&self, other: &IdeaRecord) -> bool {
        self.idea == other.idea
    }

    /// Text placed on the clipboard: the title, then a blank line and the
    /// summary when there is one.
    pub fn clipboard_text(&self) -> String {
        if self.summary.is_empty() {
            self.idea.clone()
        } else {
            format!("{}\n\n{}", self.idea, self.summary)
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The fixed list used when the idea source cannot be loaded
pub fn fallback_ideas() -> Vec<IdeaRecord> {
    vec![
        IdeaRecord::new(
            "Neighborhood compost pickup service",
            "Weekly pickup of compost for busy households, processed into saleable compost for gardeners.",
        ),
        IdeaRecord::new(
            "AR furniture try-on app",
            "Mobile app that uses AR to show furniture in your room before you buy.",
        ),
    ]
}

/// Parse an idea-list payload.
///
/// The top level must be a JSON array; any other shape is rejected with
/// [`Error::SourceShape`] so the caller can fall back.
pub fn parse_idea_list(payload: &str) -> Result<Vec<IdeaRecord>> {
    let value: serde_json::Value = serde_json::from_str(payload)?;
    if !value.is_array() {
        return Err(Error::SourceShape {
            found: json_kind(&value),
        });
    }
    Ok(serde_json::from_value(value)?)
}

/// Serialize a list of records the way favorites are stored and exported
pub fn to_pretty_json(records: &[IdeaRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_idea_list_array() {
        let payload = r#"[
            {"idea": "Dog walking marketplace", "summary": "Connect walkers with owners."},
            {"idea": "Plant care reminders"}
        ]"#;

        let ideas = parse_idea_list(payload).unwrap();

        assert_eq!(ideas.len(), 2);
        assert_eq!(ideas[0].idea, "Dog walking marketplace");
        assert_eq!(ideas[0].summary, "Connect walkers with owners.");
        assert_eq!(ideas[1].summary, "");
    }

    #[test]
    fn test_parse_idea_list_null_summary() {
        let ideas = parse_idea_list(r#"[{"idea": "A", "summary": null}]"#).unwrap();
        assert_eq!(ideas[0].summary, "");
    }

    #[test]
    fn test_parse_idea_list_empty_array() {
        assert!(parse_idea_list("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_idea_list_rejects_object() {
        let err = parse_idea_list(r#"{"ideas": []}"#).unwrap_err();
        assert!(matches!(err, Error::SourceShape { found: "object" }));
    }

    #[test]
    fn test_parse_idea_list_rejects_malformed() {
        let err = parse_idea_list("[{\"idea\": ").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_parse_idea_list_keeps_records_without_title() {
        let ideas = parse_idea_list(
            r#"[{"idea": "Good one", "summary": "kept"}, {"summary": "untitled"}, {"idea": null}]"#,
        )
        .unwrap();

        assert_eq!(ideas.len(), 3);
        assert_eq!(ideas[0].title(), "Good one");
        assert_eq!(ideas[1], IdeaRecord::new("", "untitled"));
        assert_eq!(ideas[1].title(), UNTITLED_IDEA);
        assert_eq!(ideas[2].title(), UNTITLED_IDEA);
    }

    #[test]
    fn test_fallback_has_two_entries() {
        let fallback = fallback_ideas();
        assert_eq!(fallback.len(), 2);
        assert_eq!(fallback[0].idea, "Neighborhood compost pickup service");
        assert_eq!(fallback[1].idea, "AR furniture try-on app");
    }

    #[test]
    fn test_custom_trims_input() {
        let record = IdeaRecord::custom(" Build a thing ").unwrap();
        assert_eq!(record, IdeaRecord::new("Build a thing", ""));
    }

    #[test]
    fn test_custom_rejects_whitespace() {
        assert!(IdeaRecord::custom("   ").is_none());
        assert!(IdeaRecord::custom("").is_none());
        assert!(IdeaRecord::custom("\t\n").is_none());
    }

    #[test]
    fn test_same_idea_ignores_summary() {
        let a = IdeaRecord::new("Same", "one");
        let b = IdeaRecord::new("Same", "two");
        let c = IdeaRecord::new("same", "one");
        assert!(a.same_idea(&b));
        assert!(!a.same_idea(&c));
    }

    #[test]
    fn test_clipboard_text() {
        assert_eq!(IdeaRecord::new("Title", "").clipboard_text(), "Title");
        assert_eq!(
            IdeaRecord::new("Title", "Body").clipboard_text(),
            "Title\n\nBody"
        );
    }

    #[test]
    fn test_title_placeholder() {
        assert_eq!(IdeaRecord::new("", "x").title(), UNTITLED_IDEA);
        assert_eq!(IdeaRecord::new("Named", "").title(), "Named");
    }

    #[test]
    fn test_pretty_json_is_indented() {
        let json = to_pretty_json(&[IdeaRecord::new("A", "B")]).unwrap();
        assert!(json.contains("\n  {"));
        assert!(json.contains("\"idea\": \"A\""));
        assert!(json.contains("\"summary\": \"B\""));
    }
}
