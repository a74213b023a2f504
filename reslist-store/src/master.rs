//! Reading and mutating the master document.
//!
//! The master document is a CSV file with a header row; every field of
//! every row is a raw string, absent values being empty strings. Ids are
//! assigned here, monotonically, and never reused by this tool.

use std::fs::OpenOptions;
use std::path::Path;

use tracing::{debug, info};

use reslist_grammar::Record;

use crate::error::{StoreError, StoreResult};
use crate::submission::Submission;

/// Read all rows of the master document.
pub fn read_records(path: &Path) -> StoreResult<Vec<Record>> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader
        .deserialize()
        .collect::<Result<Vec<Record>, csv::Error>>()?;
    debug!(rows = records.len(), "read master document");
    Ok(records)
}

/// The largest id currently in use, or -1 for an empty document.
fn largest_id(records: &[Record]) -> StoreResult<i64> {
    let mut largest = -1;
    for record in records {
        let id = record
            .id
            .parse::<i64>()
            .map_err(|_| StoreError::InvalidId(record.id.clone()))?;
        largest = largest.max(id);
    }
    Ok(largest)
}

/// Build a record from a submission, defaulting absent fields to the
/// given prior row. The id is never taken from the submission here.
fn merged(submission: &Submission, current: &Record) -> Record {
    let field = |name: &str, current_value: &str| {
        submission
            .get(name)
            .cloned()
            .unwrap_or_else(|| current_value.to_string())
    };
    Record {
        id: current.id.clone(),
        title: field("title", &current.title),
        responsible: field("responsible", &current.responsible),
        description: field("description", &current.description),
        publication_date: field("publication_date", &current.publication_date),
        resource_type: field("type", &current.resource_type),
        links: field("links", &current.links),
        languages: field("languages", &current.languages),
        status: field("status", &current.status),
        relevant_parts_of_ric: field("relevant_parts_of_ric", &current.relevant_parts_of_ric),
        prospects: field("prospects", &current.prospects),
        contact: field("contact", &current.contact),
        related_to: field("related_to", &current.related_to),
    }
}

/// Append a submitted resource, assigning the next id.
///
/// Serialisation of concurrent appends is the caller's concern; this
/// tool assumes it runs alone against the document.
pub fn append_resource(path: &Path, submission: &Submission) -> StoreResult<Record> {
    let records = read_records(path)?;
    let next_id = largest_id(&records)? + 1;
    let mut record = merged(submission, &Record::default());
    record.id = next_id.to_string();
    let file = OpenOptions::new().append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.serialize(&record)?;
    writer.flush()?;
    info!(id = %record.id, "appended resource");
    Ok(record)
}

/// Replace the row an edit submission names, keeping every other row
/// byte-for-byte. Fields absent from the submission keep the prior
/// row's values.
pub fn edit_resource(path: &Path, submission: &Submission) -> StoreResult<Record> {
    let id = submission.get("id").ok_or(StoreError::MissingId)?;
    let records = read_records(path)?;
    let mut edited = None;
    let rewritten: Vec<Record> = records
        .into_iter()
        .map(|record| {
            if record.id == *id {
                let replacement = merged(submission, &record);
                edited = Some(replacement.clone());
                replacement
            } else {
                record
            }
        })
        .collect();
    let Some(edited) = edited else {
        return Err(StoreError::UnknownId(id.clone()));
    };
    let mut writer = csv::Writer::from_path(path)?;
    for record in &rewritten {
        writer.serialize(record)?;
    }
    writer.flush()?;
    info!(id = %edited.id, "edited resource");
    Ok(edited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::parse_submission;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "id,title,responsible,description,publication_date,type,links,languages,status,relevant_parts_of_ric,prospects,contact,related_to\n";

    fn seeded_document() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "{}0,First,Someone,Something.,2023,tool,,,,,,,\n3,Second,Someone else,Else.,2024,article,,,,,,,\n",
            HEADER
        )
        .unwrap();
        file
    }

    #[test]
    fn append_assigns_max_plus_one() {
        let file = seeded_document();
        let submission = parse_submission(
            "title=Third&type=event&responsible=Org&description=An+event.&publication_date=2025",
        );
        let appended = append_resource(file.path(), &submission).unwrap();
        assert_eq!(appended.id, "4");

        let records = read_records(file.path()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].id, "4");
        assert_eq!(records[2].title, "Third");
        assert_eq!(records[2].links, "");
    }

    #[test]
    fn edit_merges_absent_fields_from_the_prior_row() {
        let file = seeded_document();
        let submission = parse_submission("id=3&title=Second%2C+revised");
        let edited = edit_resource(file.path(), &submission).unwrap();
        assert_eq!(edited.title, "Second, revised");
        assert_eq!(edited.publication_date, "2024");

        let records = read_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "First");
        assert_eq!(records[1].title, "Second, revised");
        assert_eq!(records[1].resource_type, "article");
    }

    #[test]
    fn edit_of_an_unknown_id_fails() {
        let file = seeded_document();
        let submission = parse_submission("id=99&title=Ghost");
        assert!(matches!(
            edit_resource(file.path(), &submission),
            Err(StoreError::UnknownId(_))
        ));
    }

    #[test]
    fn non_integer_id_is_rejected_on_append() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}abc,Bad,,,,tool,,,,,,,\n", HEADER).unwrap();
        let submission = parse_submission("title=New&type=tool");
        assert!(matches!(
            append_resource(file.path(), &submission),
            Err(StoreError::InvalidId(_))
        ));
    }
}
