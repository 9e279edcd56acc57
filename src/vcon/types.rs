//! Conversation record types served by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A participant in a conversation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Display name.
    pub name: String,
    /// Telephone number, free-form.
    pub tel: String,
}

impl Party {
    /// Create a new party.
    #[must_use]
    pub fn new(name: impl Into<String>, tel: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tel: tel.into(),
        }
    }
}

/// One utterance in a transcript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogEntry {
    /// When the utterance occurred.
    pub timestamp: DateTime<Utc>,
    /// Name of the speaking party.
    pub speaker: String,
    /// Utterance content.
    pub text: String,
}

impl DialogEntry {
    /// Create a new dialog entry.
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        speaker: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}

/// A virtualized conversation container (vCon).
///
/// Owns its parties and transcript. Dialog order is chronological and is
/// preserved on output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vcon {
    /// Record identifier.
    pub uuid: String,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Free-text topic label.
    pub subject: String,
    /// Participants in listing order.
    pub parties: Vec<Party>,
    /// Transcript in chronological order.
    pub dialog: Vec<DialogEntry>,
}

impl Vcon {
    /// Create a record with no parties and an empty transcript.
    #[must_use]
    pub fn new(
        uuid: impl Into<String>,
        created_at: DateTime<Utc>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            created_at,
            subject: subject.into(),
            parties: Vec::new(),
            dialog: Vec::new(),
        }
    }

    /// Append a party.
    #[must_use]
    pub fn with_party(mut self, party: Party) -> Self {
        self.parties.push(party);
        self
    }

    /// Append a transcript entry.
    #[must_use]
    pub fn with_dialog(mut self, entry: DialogEntry) -> Self {
        self.dialog.push(entry);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Vcon {
        let at = Utc.with_ymd_and_hms(2024, 2, 7, 14, 30, 0).unwrap();
        Vcon::new("call-x", at, "Subject")
            .with_party(Party::new("Ann", "555"))
            .with_dialog(DialogEntry::new(at, "Ann", "hello"))
    }

    #[test]
    fn test_json_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["created_at", "dialog", "parties", "subject", "uuid"]);

        assert_eq!(value["parties"][0]["name"], "Ann");
        assert_eq!(value["parties"][0]["tel"], "555");
        assert_eq!(value["dialog"][0]["speaker"], "Ann");
        assert_eq!(value["dialog"][0]["text"], "hello");
    }

    #[test]
    fn test_timestamps_are_rfc3339_utc() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["created_at"], "2024-02-07T14:30:00Z");
        assert_eq!(value["dialog"][0]["timestamp"], "2024-02-07T14:30:00Z");
    }

    #[test]
    fn test_builder_preserves_order() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 1, 1, 0, 1, 0).unwrap();
        let vcon = Vcon::new("v", at, "s")
            .with_party(Party::new("B", "2"))
            .with_party(Party::new("A", "1"))
            .with_dialog(DialogEntry::new(at, "B", "first"))
            .with_dialog(DialogEntry::new(later, "A", "second"));

        assert_eq!(vcon.parties[0].name, "B");
        assert_eq!(vcon.parties[1].name, "A");
        assert_eq!(vcon.dialog[0].text, "first");
        assert_eq!(vcon.dialog[1].text, "second");
    }
}
