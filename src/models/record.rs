use std::collections::HashMap;

/// One survey response as exported: question text → answer, in column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Response timestamp, unique per response
    pub timestamp: String,
    /// (long-form question, free-text answer) pairs
    pub answers: Vec<(String, String)>,
}

impl RawRecord {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            answers: Vec::new(),
        }
    }

    pub fn with_answer(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.answers.push((question.into(), answer.into()));
        self
    }

    /// Answer given to a question, if the question was part of the export
    pub fn answer(&self, question: &str) -> Option<&str> {
        self.answers
            .iter()
            .find(|(q, _)| q == question)
            .map(|(_, a)| a.as_str())
    }
}

/// A response after field renaming and summary derivation.
///
/// Values are `None` when a summary rule deliberately yields no label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub timestamp: String,
    fields: HashMap<&'static str, Option<String>>,
}

impl NormalizedRecord {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            fields: HashMap::new(),
        }
    }

    pub fn set(&mut self, field: &'static str, value: Option<String>) {
        self.fields.insert(field, value);
    }

    /// Value of a field; `None` both when absent and when null
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(|v| v.as_deref())
    }

    /// Value of a field or the empty string
    pub fn get_or_empty(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Whether the field exists on this record, even with a null value
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// Normalized responses in input order
#[derive(Debug, Clone, Default)]
pub struct NormalizedSurvey {
    pub records: Vec<NormalizedRecord>,
}

impl NormalizedSurvey {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NormalizedRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_absent_fields() {
        let mut record = NormalizedRecord::new("2020/06/01 10:00:00");
        record.set("a", Some("x".to_string()));
        record.set("b", None);

        assert_eq!(record.get("a"), Some("x"));
        assert_eq!(record.get("b"), None);
        assert!(record.contains("b"));
        assert!(!record.contains("c"));
        assert_eq!(record.get_or_empty("c"), "");
        assert_eq!(record.field_count(), 2);
    }

    #[test]
    fn test_raw_answer_lookup() {
        let raw = RawRecord::new("t1").with_answer("Q1", "yes");
        assert_eq!(raw.answer("Q1"), Some("yes"));
        assert_eq!(raw.answer("Q2"), None);
    }
}
