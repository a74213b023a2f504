//! The add-resource and edit-resource forms.
//!
//! Both pages use the same form; the edit variant is prefilled from the
//! record being edited and carries its id in a hidden field.

use reslist_grammar::Record;

/// Radio buttons, in presentation order: element id, stored value, label.
const TYPE_CHOICES: [(&str, &str, &str); 6] = [
    ("application", "web application", "Application"),
    ("article", "article", "Article"),
    ("dataset", "dataset", "Dataset"),
    ("event", "event", "Event"),
    ("thesis", "thesis", "Thesis"),
    ("tool", "tool", "Tool"),
];

/// Checkboxes for the known parts of RiC; anything else checks "Other".
const RIC_PART_CHOICES: [(&str, &str); 5] = [
    ("ric-cm-1-0", "RiC-CM 1.0"),
    ("ric-cm-0-2", "RiC-CM 0.2"),
    ("ric-o-1-0", "RiC-O 1.0"),
    ("ric-o-0-2", "RiC-O 0.2"),
    ("ric-other", "Other"),
];

struct FormValues<'a> {
    title: &'a str,
    resource_type: &'a str,
    responsible: &'a str,
    publication_date: &'a str,
    description: &'a str,
    links: &'a str,
    languages: &'a str,
    ric_parts: Vec<&'static str>,
    prospects: &'a str,
    contact: &'a str,
    related_to: &'a str,
    id: Option<&'a str>,
    submit: &'a str,
}

/// An empty form for adding a resource.
pub(crate) fn blank_form(backend_url: &str) -> String {
    resource_form(
        backend_url,
        &FormValues {
            title: "",
            resource_type: "",
            responsible: "",
            publication_date: "",
            description: "",
            links: "",
            languages: "",
            ric_parts: Vec::new(),
            prospects: "",
            contact: "",
            related_to: "",
            id: None,
            submit: "Add",
        },
    )
}

/// A form prefilled with a record's raw field values.
pub(crate) fn prefilled_form(record: &Record, backend_url: &str) -> String {
    resource_form(
        backend_url,
        &FormValues {
            title: &record.title,
            resource_type: record.resource_type.trim(),
            responsible: &record.responsible,
            publication_date: &record.publication_date,
            description: &record.description,
            links: &record.links,
            languages: &record.languages,
            ric_parts: ric_parts_to_check(&record.relevant_parts_of_ric),
            prospects: &record.prospects,
            contact: &record.contact,
            related_to: &record.related_to,
            id: Some(&record.id),
            submit: "Edit",
        },
    )
}

/// Map the raw relevant-parts field onto the checkbox values: each entry
/// is one of the known parts, or checks "Other".
fn ric_parts_to_check(raw: &str) -> Vec<&'static str> {
    let known = ["RiC-CM 1.0", "RiC-CM 0.2", "RiC-O 1.0", "RiC-O 0.2"];
    raw.split('|')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match known.iter().find(|candidate| **candidate == part) {
            Some(candidate) => *candidate,
            None => "Other",
        })
        .collect()
}

fn checked(flag: bool) -> &'static str {
    if flag {
        "checked"
    } else {
        ""
    }
}

fn type_fieldset(selected: &str) -> String {
    TYPE_CHOICES
        .iter()
        .map(|(element_id, value, label)| {
            format!(
                r#"            <div class="resource-type">
              <input type="radio" id="{element_id}" name="type" value="{value}" {checked} required/>
              <label for="{element_id}">{label}</label>
            </div>"#,
                element_id = element_id,
                value = value,
                checked = checked(*value == selected),
                label = label,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn ric_fieldset(parts_to_check: &[&str]) -> String {
    RIC_PART_CHOICES
        .iter()
        .map(|(element_id, value)| {
            format!(
                r#"            <div class="ric-part">
              <input type="checkbox" id="{element_id}" name="relevant_parts_of_ric" value="{value}" {checked}/>
              <label for="{element_id}">{value}</label>
            </div>"#,
                element_id = element_id,
                value = value,
                checked = checked(parts_to_check.contains(value)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn resource_form(backend_url: &str, values: &FormValues) -> String {
    let id_field = match values.id {
        Some(id) => format!(
            "\n        <input type=\"hidden\" name=\"id\" value=\"{id}\">"
        ),
        None => String::new(),
    };
    format!(
        r#"    <div class="add-resource">
      <form action="{backend_url}" method="post">
        <div class="add-resource-section">
          <label for="title">Title <span class="format-instruction">(can be provided in more than one language, each ending in a language tag such as [en], separated by |)</span></label>
          <input type="text" id="title" name="title" value="{title}" required/>
        </div>
        <div class="add-resource-section">
          <fieldset>
            <legend>Resource type</legend>
{type_fieldset}
          </fieldset>
        </div>
        <div class="add-resource-section">
          <label for="responsible">Authors/creators/organisers <span class="format-instruction">(should be separated by |, and a webpage can optionally be provided in parantheses after each, e.g. name (webpage) | other name (webpage))</span></label>
          <input type="text" id="responsible" name="responsible" value="{responsible}" required/>
        </div>
        <div class="add-resource-section">
          <label for="publication-date">Dates of publication/release/occurrence <span class="format-instruction">(as YYYY, YYYY-MM, or YYYY-MM-DD, optionally followed by [version n.n], and separated by | if more than one date is provided, e.g. 2023-12 or 2024-03 [version 1.0] | 2024-10 [version 2.0])</span></label>
          <input type="text" id="publication-date" name="publication_date" value="{publication_date}" required/>
        </div>
        <div class="add-resource-section">
          <label for="description">Description <span class="format-instruction">(simple Markdown syntax can optionally be used, e.g. for links as [text to display](url), and more than one language can be provided, separated by |, each ending with a language tag such as [en])</span></label>
          <textarea id="description" name="description" rows="10" required/>{description}</textarea>
        </div>
        <div class="add-resource-section">
          <label for="links">Links <span class="format-instruction">(should be separated by a | symbol, and each either in Markdown format [text to display](url) or a verbatim URL)</span></label>
          <input type="text" id="links" name="links" value="{links}"/>
        </div>
        <div class="add-resource-section">
          <label for="languages">Languages available in <span class="format-instruction">(should be separated by a | symbol, and short clarifications can be provided in parentheses, e.g. French | English (abstract))</span></label>
          <input type="text" id="languages" name="languages" value="{languages}"/>
        </div>
        <div class="add-resource-section">
          <fieldset>
            <legend>Relevant parts of RiC <span class="format-instruction">(ignoring patch versions, i.e. treating n.n.n as n.n)</span></legend>
{ric_fieldset}
          </fieldset>
        </div>
        <div class="add-resource-section">
          <label for="prospects">Prospects / status</label>
          <textarea id="prospects" name="prospects" rows="10"/>{prospects}</textarea>
        </div>
        <div class="add-resource-section">
          <label for="contact">Contacts <span class="format-instruction">(should be separated by a | symbol, can e.g. be an email address)</span></label>
          <input type="text" id="contact" name="contact" value="{contact}"/>
        </div>
        <div class="add-resource-section">
          <label for="related-to">Related resources <span class="format-instruction">(should be separated by a | symbol, and can be either be the URL of another resource in the list, or be in the format #n, where n is the number at the end of such an URL)</span></label>
          <input type="text" id="related-to" name="related_to" value="{related_to}"/>
        </div>{id_field}
        <div class="add-resource-section add-resource-section-button">
          <input type="submit" class="add-button" value="{submit}"/>
        </div>
      </form>
    </div>"#,
        backend_url = backend_url,
        title = values.title,
        type_fieldset = type_fieldset(values.resource_type),
        responsible = values.responsible,
        publication_date = values.publication_date,
        description = values.description,
        links = values.links,
        languages = values.languages,
        ric_fieldset = ric_fieldset(&values.ric_parts),
        prospects = values.prospects,
        contact = values.contact,
        related_to = values.related_to,
        id_field = id_field,
        submit = values.submit,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ric_parts_check_other() {
        assert_eq!(
            ric_parts_to_check("RiC-CM 1.0 | RiC-FAQ"),
            vec!["RiC-CM 1.0", "Other"]
        );
    }

    #[test]
    fn edit_form_carries_the_hidden_id() {
        let record = Record {
            id: "12".to_string(),
            resource_type: "tool".to_string(),
            ..Record::default()
        };
        let form = prefilled_form(&record, "https://backend.example.org/edit");
        assert!(form.contains("<input type=\"hidden\" name=\"id\" value=\"12\">"));
        assert!(form.contains("id=\"tool\" name=\"type\" value=\"tool\" checked required"));
        assert!(form.contains("value=\"Edit\""));
    }
}
