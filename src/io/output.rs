use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};

use crate::models::{field, ApprovalSet, NormalizedRecord, NormalizedSurvey, WisdomEntry, WisdomField};

/// Cleaned, analysis-ready table
pub struct CleanedTable<'a> {
    survey: &'a NormalizedSurvey,
    headers: &'a [&'a str],
}

impl<'a> CleanedTable<'a> {
    pub fn new(survey: &'a NormalizedSurvey, headers: &'a [&'a str]) -> Self {
        Self { survey, headers }
    }

    /// Cell for one column: the timestamp column is the record identity,
    /// fields missing from the record or null render empty
    fn cell<'r>(&self, record: &'r NormalizedRecord, column: &str) -> &'r str {
        if column == field::TIMESTAMP {
            &record.timestamp
        } else {
            record.get_or_empty(column)
        }
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(QuoteStyle::Never)
            .from_writer(writer);

        writer.write_record(self.headers)?;
        for record in self.survey.iter() {
            writer.write_record(self.headers.iter().map(|h| self.cell(record, h)))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write to a TSV file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        self.write_to(file)
            .with_context(|| format!("Failed to write table: {:?}", path))
    }
}

/// Review file listing every wisdom answer with its status marker.
///
/// One line per entry: `identifier<TAB>status<TAB>text`, where status is
/// empty for approved entries and `R` for everything else. Reviewers keep
/// an entry by clearing its `R` and listing its identifier in the sidecar.
pub struct AuditFile<'a> {
    entries: &'a [WisdomEntry],
}

impl<'a> AuditFile<'a> {
    pub fn new(entries: &'a [WisdomEntry]) -> Self {
        Self { entries }
    }

    pub fn format(&self) -> String {
        let mut output = String::new();
        for entry in self.entries {
            output.push_str(&format!(
                "{}\t{}\t{}\n",
                entry.identifier,
                entry.status.marker(),
                single_line(&entry.text)
            ));
        }
        output
    }

    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())
            .with_context(|| format!("Failed to write audit file: {:?}", path))
    }
}

/// Markdown document quoting the approved wisdom answers
pub struct CuratedDocument<'a> {
    survey: &'a NormalizedSurvey,
    approvals: &'a ApprovalSet,
    title: &'a str,
    sections: &'a [WisdomField],
}

pub const DOCUMENT_TITLE: &str = "## The words of early career researchers";

impl<'a> CuratedDocument<'a> {
    pub fn new(survey: &'a NormalizedSurvey, approvals: &'a ApprovalSet) -> Self {
        Self {
            survey,
            approvals,
            title: DOCUMENT_TITLE,
            sections: &WisdomField::ALL,
        }
    }

    /// Replace the heading and the sections rendered below it
    pub fn with_layout(mut self, title: &'a str, sections: &'a [WisdomField]) -> Self {
        self.title = title;
        self.sections = sections;
        self
    }

    /// Approved, publishable quotes for one field, in survey order
    pub fn quotes(
        &self,
        wisdom: WisdomField,
    ) -> impl Iterator<Item = (&'a NormalizedRecord, &'a str)> + 'a {
        let approvals = self.approvals;
        self.survey.records.iter().filter_map(move |record| {
            if !approvals.contains(&wisdom.identifier(&record.timestamp)) {
                return None;
            }
            let text = record.get(wisdom.field_name())?.trim();
            if text.is_empty() || !is_publishable_gender(record.get_or_empty(field::MENTEE_GENDER)) {
                return None;
            }
            Some((record, text))
        })
    }

    pub fn format(&self) -> String {
        let mut output = format!("{}\n\n", self.title);

        for &wisdom in self.sections {
            output.push_str(&format!("### {}\n\n", wisdom.subtitle()));
            output.push_str(&format!("{}\n\n", wisdom.introduction()));

            for (record, text) in self.quotes(wisdom) {
                output.push_str(&format_quote(record, wisdom, text));
            }
        }

        output
    }

    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())
            .with_context(|| format!("Failed to write curated document: {:?}", path))
    }
}

/// Only respondents answering "Man" or "Woman" are quoted
fn is_publishable_gender(gender: &str) -> bool {
    matches!(gender, "Man" | "Woman")
}

/// Glyph for a gender answer; anything but "Man" renders ♀
fn gender_glyph(gender: &str) -> &'static str {
    if gender == "Man" { "♂" } else { "♀" }
}

/// Styled phrase for the 1..5 overall experience rating
fn experience_phrase(rating: &str) -> &'static str {
    match rating {
        "1" | "2" => r#"a <span style="color:red;">very negative experience</span>"#,
        "4" => r#"a <span style="color:green;">positive experience</span>"#,
        "5" => r#"a <span style="color:green;">very positive experience</span>"#,
        _ => r#"a <span style="color:orange;">neutral experience</span>"#,
    }
}

/// Runs of two or more spaces mark paragraph breaks in the export
fn paragraph_breaks(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut spaces = 0usize;

    for c in text.chars() {
        if c == ' ' {
            spaces += 1;
            continue;
        }
        match spaces {
            0 => {}
            1 => output.push(' '),
            _ => output.push_str("<br /><br />"),
        }
        spaces = 0;
        output.push(c);
    }
    match spaces {
        0 => {}
        1 => output.push(' '),
        _ => output.push_str("<br /><br />"),
    }

    output
}

/// Tabs and line breaks would split an audit line
fn single_line(text: &str) -> String {
    text.replace(['\t', '\r', '\n'], " ")
}

fn format_quote(record: &NormalizedRecord, wisdom: WisdomField, text: &str) -> String {
    let mentee = gender_glyph(record.get_or_empty(field::MENTEE_GENDER));
    let mentor = gender_glyph(record.get_or_empty(field::MENTOR_GENDER));

    format!(
        "<blockquote>\n{}\n<div class=\"blockquote-author\"><b>{}</b> ({}) had {} in <b>{}</b><br />{}</div>\n</blockquote>\n\n",
        paragraph_breaks(text),
        record.get_or_empty(field::MENTEE_THEN),
        mentee,
        experience_phrase(record.get_or_empty(field::EXPERIENCE_WITH_MENTOR)),
        record.get_or_empty(field::COUNTRY),
        wisdom.relation(mentor),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReviewStatus;

    fn record(timestamp: &str, gender: &str, advice: &str) -> NormalizedRecord {
        let mut record = NormalizedRecord::new(timestamp);
        record.set(field::MENTEE_THEN, Some("Postdoc".to_string()));
        record.set(field::MENTEE_GENDER, Some(gender.to_string()));
        record.set(field::MENTOR_GENDER, Some("Man".to_string()));
        record.set(field::EXPERIENCE_WITH_MENTOR, Some("1".to_string()));
        record.set(field::COUNTRY, Some("Canada".to_string()));
        record.set(field::MENTEE_ADVICE_TO_MENTOR, Some(advice.to_string()));
        record
    }

    #[test]
    fn test_table_orders_columns_and_blanks_missing() {
        let mut r = NormalizedRecord::new("t1");
        r.set(field::COUNTRY, Some("Canada".to_string()));
        r.set(field::MENTEE_EXPERIENCE_WAS_COMMON_SUMMARY, None);
        r.set(field::STATE, Some("Oregon".to_string()));
        let survey = NormalizedSurvey { records: vec![r] };
        let headers = [
            field::TIMESTAMP,
            field::MENTEE_EXPERIENCE_WAS_COMMON_SUMMARY,
            field::COUNTRY,
            field::DISCIPLINE,
        ];

        let mut buffer = Vec::new();
        CleanedTable::new(&survey, &headers).write_to(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(
            text,
            "timestamp\tmentee_experience_was_common_summary\tcountry\tdiscipline\nt1\t\tCanada\t\n"
        );
    }

    #[test]
    fn test_audit_lines() {
        let entries = vec![
            WisdomEntry {
                identifier: "mentee_advice_to_mentor!t1".to_string(),
                field: WisdomField::MenteeAdviceToMentor,
                timestamp: "t1".to_string(),
                text: "listen".to_string(),
                status: ReviewStatus::Approved,
            },
            WisdomEntry {
                identifier: "mentee_advice_to_mentor!t2".to_string(),
                field: WisdomField::MenteeAdviceToMentor,
                timestamp: "t2".to_string(),
                text: "be\tkind".to_string(),
                status: ReviewStatus::PendingReview,
            },
        ];

        let text = AuditFile::new(&entries).format();
        assert_eq!(
            text,
            "mentee_advice_to_mentor!t1\t\tlisten\nmentee_advice_to_mentor!t2\tR\tbe kind\n"
        );
    }

    #[test]
    fn test_write_errors_name_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("wisdom.md");
        let survey = NormalizedSurvey::default();
        let approvals = ApprovalSet::default();

        let err = CuratedDocument::new(&survey, &approvals)
            .write_file(&path)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("wisdom.md"));

        let err = AuditFile::new(&[]).write_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("wisdom.md"));
    }

    #[test]
    fn test_paragraph_breaks() {
        assert_eq!(paragraph_breaks("one two"), "one two");
        assert_eq!(paragraph_breaks("one.  two"), "one.<br /><br />two");
        assert_eq!(paragraph_breaks("one.     two"), "one.<br /><br />two");
    }

    #[test]
    fn test_experience_phrases() {
        assert!(experience_phrase("1").contains("color:red;\">very negative experience"));
        assert_eq!(experience_phrase("2"), experience_phrase("1"));
        assert_eq!(
            experience_phrase("4"),
            r#"a <span style="color:green;">positive experience</span>"#
        );
        assert!(experience_phrase("5").contains("very positive"));
        assert!(experience_phrase("").contains("neutral"));
        assert!(experience_phrase("x").contains("color:orange"));
    }

    #[test]
    fn test_author_line_for_low_rating_and_other_mentor_gender() {
        let mut r = record("t1", "Woman", "listen more");
        r.set(field::EXPERIENCE_WITH_MENTOR, Some("2".to_string()));
        r.set(field::MENTOR_GENDER, Some("Queer / Non-conforming".to_string()));
        let survey = NormalizedSurvey { records: vec![r] };
        let approvals: ApprovalSet = std::iter::once(
            WisdomField::MenteeAdviceToMentor.identifier("t1"),
        )
        .collect();

        let text = CuratedDocument::new(&survey, &approvals).format();
        assert!(text.contains(
            "had a <span style=\"color:red;\">very negative experience</span> in <b>Canada</b><br />shares <b>their advice</b> for their mentor (♀)</div>"
        ));
    }

    #[test]
    fn test_document_includes_only_approved_binary_gender_quotes() {
        let survey = NormalizedSurvey {
            records: vec![
                record("t1", "Woman", "  listen more  "),
                record("t2", "Queer / Non-conforming", "private"),
                record("t3", "Man", "not approved"),
                record("t4", "Man", ""),
            ],
        };
        let approvals: ApprovalSet = ["t1", "t2", "t4"]
            .iter()
            .map(|t| WisdomField::MenteeAdviceToMentor.identifier(t))
            .collect();

        let doc = CuratedDocument::new(&survey, &approvals);
        let quotes: Vec<_> = doc
            .quotes(WisdomField::MenteeAdviceToMentor)
            .map(|(r, text)| (r.timestamp.as_str(), text))
            .collect();
        assert_eq!(quotes, vec![("t1", "listen more")]);

        let text = doc.format();
        assert!(text.starts_with(DOCUMENT_TITLE));
        assert_eq!(text.matches("<blockquote>").count(), 1);
        assert!(text.contains(
            "<b>Postdoc</b> (♀) had a <span style=\"color:red;\">very negative experience</span> in <b>Canada</b><br />shares <b>their advice</b> for their mentor (♂)"
        ));
        assert!(!text.contains("private"));
        for wisdom in WisdomField::ALL {
            assert!(text.contains(&format!("### {}", wisdom.subtitle())));
        }
    }
}
