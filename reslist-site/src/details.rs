//! The full detail rendering of a record.

use reslist_grammar::{
    extras, parse_dates, parse_description, parse_links_field, parse_title, with_webpages,
    GrammarResult, Record, Responsible, ResourceType,
};

use crate::layout::FragmentPaths;
use crate::render::{render_inlines, render_tagged_link, versioned_date_text};

/// Render the detail fragment: heading, responsible parties, dates,
/// description, and the remainder block of optional fields.
pub fn detail_fragment(record: &Record, paths: &FragmentPaths) -> GrammarResult<String> {
    let kind = record.kind()?;
    let (title, alternative) = parse_title(&record.title)?;
    let alternative = match alternative {
        Some(alternative) => format!("\n        ({alternative})"),
        None => String::new(),
    };
    Ok(format!(
        "    <div class=\"resource-details\" id=\"resource-details\">\n      \
         <h2><img class=\"resource-details-icon\" src=\"{icons}/{icon}\" alt=\"{alt}\"/>{title}</h2>\n      \
         <ul>{alternative}\n        \
         <li><span class=\"resource-details-responsible\">{responsible_label}: {responsible}</span></li>\n        \
         <li>{date_label}: {dates}</li>\n        \
         <li>{description}</li>{remainder}\n      \
         </ul>\n    </div>",
        icons = paths.icons,
        icon = kind.icon(),
        alt = kind.label(),
        title = title,
        alternative = alternative,
        responsible_label = kind.responsible_label(),
        responsible = responsible_block(record, kind)?,
        date_label = kind.date_label(),
        dates = date_block(record)?,
        description = description_block(record)?,
        remainder = remainder_block(record, kind, paths)?,
    ))
}

/// Responsible parties with their webpages: comma-joined for articles, a
/// single line for one entry, an itemised list otherwise.
fn responsible_block(record: &Record, kind: ResourceType) -> GrammarResult<String> {
    let entries = with_webpages(&record.responsible)?;
    let rendered: Vec<String> = entries.iter().map(render_responsible).collect();
    if kind == ResourceType::Article {
        return Ok(rendered.join(", "));
    }
    match rendered.as_slice() {
        [single] => Ok(single.clone()),
        several => {
            let items: String = several
                .iter()
                .map(|entry| format!("<li class=\"responsible\">{entry}</li>"))
                .collect();
            Ok(format!("<ul>{items}</ul>"))
        }
    }
}

fn render_responsible(entry: &Responsible) -> String {
    match entry {
        Responsible::Plain(name) => name.clone(),
        Responsible::WithWebpage { name, page } => format!(
            "{} <span class=\"responsible-webpage\">({})</span>",
            name,
            render_tagged_link(page, None)
        ),
    }
}

fn date_block(record: &Record) -> GrammarResult<String> {
    let dates = parse_dates(&record.publication_date)?;
    match dates.as_slice() {
        [single] => Ok(versioned_date_text(single)),
        several => {
            let items: String = several
                .iter()
                .map(|entry| format!("<li class=\"version\">{}</li>", versioned_date_text(entry)))
                .collect();
            Ok(format!("<ul>{items}</ul>"))
        }
    }
}

fn description_block(record: &Record) -> GrammarResult<String> {
    let paragraphs = parse_description(&record.description)?;
    let rendered: Vec<String> = paragraphs
        .iter()
        .map(|paragraph| {
            let mut body = render_inlines(&paragraph.content);
            if let Some(language) = paragraph.language {
                body.push_str(&format!(" ({})", language.display_name()));
            }
            if paragraph.after_language_change {
                format!("<p class=\"after-language-change\">{body}</p>")
            } else {
                format!("<p>{body}</p>")
            }
        })
        .collect();
    Ok(rendered.join("\n\n            "))
}

/// The trailing optional fields, in fixed order; an empty source field
/// contributes no item at all.
fn remainder_block(
    record: &Record,
    kind: ResourceType,
    paths: &FragmentPaths,
) -> GrammarResult<String> {
    let mut remainder = String::new();
    for link in parse_links_field(&record.links)? {
        remainder.push_str(&format!(
            "\n        <li>{}</li>",
            render_tagged_link(&link, Some("link-from-resource"))
        ));
    }
    let languages = extras::pipe_list(&record.languages);
    if !languages.is_empty() {
        let held_or_available = if kind == ResourceType::Event {
            "Held"
        } else {
            "Available"
        };
        remainder.push_str(&format!(
            "\n        <li>{} in: {}</li>",
            held_or_available,
            languages.join(", ")
        ));
    }
    let ric_parts = extras::pipe_list(&record.relevant_parts_of_ric);
    if !ric_parts.is_empty() {
        let spans: Vec<String> = ric_parts
            .iter()
            .map(|part| format!("<span class=\"ric-part\">{part}</span>"))
            .collect();
        remainder.push_str(&format!("\n        <li>{}</li>", spans.join(" ")));
    }
    if !record.prospects.is_empty() {
        remainder.push_str(&format!("\n        <li>{}</li>", record.prospects));
    }
    let contact_entries = extras::contacts(&record.contact);
    if !contact_entries.is_empty() {
        let joined: Vec<String> = contact_entries
            .iter()
            .map(|entry| format!("<span class=\"contact-details\">{entry}</span>"))
            .collect();
        remainder.push_str(&format!(
            "\n        <li>Contact: {}</li>",
            joined.join(", ")
        ));
    }
    let related = extras::related_ids(&record.related_to)?;
    if !related.is_empty() {
        let joined: Vec<String> = related
            .iter()
            .map(|id| {
                format!(
                    "<a href=\"{}/{}.html\" class=\"related-to\">#{}</a>",
                    paths.resource_details, id, id
                )
            })
            .collect();
        remainder.push_str(&format!(
            "\n        <li>Relates to RiC resources: {}</li>",
            joined.join(", ")
        ));
    }
    Ok(remainder)
}
