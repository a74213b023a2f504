//! The closed enumeration of resource kinds.
//!
//! Each kind carries its derived rendering constants (display label,
//! responsible/date label words, icon file, filter slug) as exhaustive
//! matches, so adding a kind is a one-place change the compiler checks.

use crate::error::{GrammarError, GrammarResult};

/// The six kinds of resource the list knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Article,
    Dataset,
    Event,
    Thesis,
    Tool,
    WebApplication,
}

impl ResourceType {
    /// All kinds, in the order the filter menu presents them.
    pub const ALL: [ResourceType; 6] = [
        ResourceType::Article,
        ResourceType::Tool,
        ResourceType::Event,
        ResourceType::Thesis,
        ResourceType::WebApplication,
        ResourceType::Dataset,
    ];

    /// Parse the raw `type` field of a record.
    pub fn from_field(raw: &str) -> GrammarResult<ResourceType> {
        match raw.trim() {
            "article" => Ok(ResourceType::Article),
            "dataset" => Ok(ResourceType::Dataset),
            "event" => Ok(ResourceType::Event),
            "thesis" => Ok(ResourceType::Thesis),
            "tool" => Ok(ResourceType::Tool),
            "web application" => Ok(ResourceType::WebApplication),
            other => Err(GrammarError::UnknownResourceType {
                value: other.to_string(),
            }),
        }
    }

    /// The raw value stored in the `type` column.
    pub fn field_value(self) -> &'static str {
        match self {
            ResourceType::Article => "article",
            ResourceType::Dataset => "dataset",
            ResourceType::Event => "event",
            ResourceType::Thesis => "thesis",
            ResourceType::Tool => "tool",
            ResourceType::WebApplication => "web application",
        }
    }

    /// Human label, used for icon alternative text among other places.
    pub fn label(self) -> &'static str {
        match self {
            ResourceType::Article => "Journal article",
            ResourceType::Dataset => "Dataset",
            ResourceType::Event => "Event",
            ResourceType::Thesis => "Thesis",
            ResourceType::Tool => "Tool",
            ResourceType::WebApplication => "Application",
        }
    }

    /// Label word for the responsible-party line of a detail page.
    pub fn responsible_label(self) -> &'static str {
        match self {
            ResourceType::Article => "Authors",
            ResourceType::Dataset => "Authors",
            ResourceType::Event => "Responsible",
            ResourceType::Thesis => "Author",
            ResourceType::Tool => "Maintainers",
            ResourceType::WebApplication => "Maintainers",
        }
    }

    /// Label word for the date line of a detail page.
    pub fn date_label(self) -> &'static str {
        match self {
            ResourceType::Article => "Published",
            ResourceType::Dataset => "Published",
            ResourceType::Event => "Takes/took place",
            ResourceType::Thesis => "Published",
            ResourceType::Tool => "Released",
            ResourceType::WebApplication => "Released",
        }
    }

    /// Icon file name under the icons directory.
    pub fn icon(self) -> &'static str {
        match self {
            ResourceType::Article => "article.svg",
            ResourceType::Dataset => "dataset.svg",
            ResourceType::Event => "event.svg",
            ResourceType::Thesis => "thesis.svg",
            ResourceType::Tool => "tool.svg",
            ResourceType::WebApplication => "web_application.svg",
        }
    }

    /// Plural slug used for the per-type filtering page file names.
    pub fn filter_slug(self) -> &'static str {
        match self {
            ResourceType::Article => "articles",
            ResourceType::Dataset => "datasets",
            ResourceType::Event => "events",
            ResourceType::Thesis => "theses",
            ResourceType::Tool => "tools",
            ResourceType::WebApplication => "applications",
        }
    }
}
