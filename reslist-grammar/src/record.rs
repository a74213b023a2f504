//! One row of the master document.

use serde::{Deserialize, Serialize};

use crate::error::GrammarResult;
use crate::resource_type::ResourceType;

/// A resource record, exactly as stored.
///
/// All fields are raw strings in the master document's column order; an
/// absent field is the empty string, never a missing key. The field
/// grammar is only applied at render time, so a record can hold values
/// the grammar would reject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub title: String,
    pub responsible: String,
    pub description: String,
    pub publication_date: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub links: String,
    pub languages: String,
    /// Carried for row fidelity; not rendered.
    pub status: String,
    pub relevant_parts_of_ric: String,
    pub prospects: String,
    pub contact: String,
    pub related_to: String,
}

impl Record {
    /// The record's kind, parsed from the raw `type` field.
    pub fn kind(&self) -> GrammarResult<ResourceType> {
        ResourceType::from_field(&self.resource_type)
    }
}
