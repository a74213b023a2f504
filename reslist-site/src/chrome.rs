//! Shared page chrome: the site shell, menus, and the static pages.
//!
//! Fragments from [`crate::entry`] and [`crate::details`] are wrapped here
//! into complete pages: header, RiC links bar, logo, introduction text,
//! add/edit and filter menus.

use reslist_grammar::{GrammarResult, Record, ResourceType};

use crate::compose::filter_by_type;
use crate::details::detail_fragment;
use crate::entry::ListEntry;
use crate::forms::{blank_form, prefilled_form};
use crate::layout::{FragmentPaths, SiteLayout};

/// Whether a submission page reports an addition or an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionAction {
    Addition,
    Edit,
}

impl SubmissionAction {
    fn word(self) -> &'static str {
        match self {
            SubmissionAction::Addition => "addition",
            SubmissionAction::Edit => "edit",
        }
    }
}

struct PageShell<'a> {
    css_path: &'a str,
    logo_path: &'a str,
    resource_list_path: &'a str,
    introduction: &'a str,
    add_or_edit_menu: &'a str,
    filter_menu: &'a str,
    content: &'a str,
}

fn render_page(shell: &PageShell) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Records in Contexts — Resource List</title>
    <link rel="stylesheet" href="{css_path}">
    <meta name="viewport" content="width=device-width, initial-scale=1"/>
  </head>
  <body>
    <div class="header">
      <a href="{resource_list_path}" class="title"><h1>Records in Contexts — Resource List</h1></a>
    </div>
    <div class="ric-links">
      <p><span><a href="https://www.ica.org/resource/records-in-contexts-conceptual-model/">RiC-CM</a></span><span><a href="https://www.ica.org/standards/RiC/ontology">RiC-O</a></span><span class="last"><a href="https://groups.google.com/g/Records_in_Contexts_users">RiC users group</a></span></p>
    </div>
    <div class="egad-logo">
      <img class="egad-logo" src="{logo_path}"/>
    </div>{introduction}
    <div class="menu" id="menu">
{add_or_edit_menu}
{filter_menu}
    </div>
{content}
  </body>
</html>"#,
        css_path = shell.css_path,
        resource_list_path = shell.resource_list_path,
        logo_path = shell.logo_path,
        introduction = shell.introduction,
        add_or_edit_menu = shell.add_or_edit_menu,
        filter_menu = shell.filter_menu,
        content = shell.content,
    )
}

const LIST_INTRODUCTION: &str = r#"
    <div class="introduction">
      <p>A list of resources in which <a href="https://www.ica.org/ica-network/expert-groups/egad/records-in-contexts-ric/">Records in Contexts</a> (RiC) is used or discussed, sorted reverse chronologically. The list is built collaboratively by the RiC user community, and managed by EGAD. It is far from exhaustive — please contribute using the 'Add' button!</p>

      <p>This list includes only a few details for each resource (e.g. not a full bibliographic reference in the case of articles) but more details can be obtained by clicking on a resource. The buttons below can be used to filter by resource type.</p>
    </div>"#;

const DETAILS_INTRODUCTION: &str = r#"
    <div class="introduction">
      <p>Use the green button to edit the resource (moderated: it may take a few days before changes appear).</p>
    </div>"#;

const ADD_INTRODUCTION: &str = r#"
    <div class="introduction">
      <p>Please fill in the form with the details of the resource you wish to add. The first five fields (up to and including 'Description') are required. The submission will be checked by moderators, and the new resource should appear in the list in a few days.</p>
    </div>"#;

const EDIT_INTRODUCTION: &str = r#"
    <div class="introduction">
      <p>Please make use of the form to edit the details of the resource you wish to add. The first five fields (up to and including 'Description') are required. The submission will be checked by moderators, and the edits should appear in a few days.</p>
    </div>"#;

const FAILURE_CONTENT: &str = r#"    <div class="failure">
      <p>An error occurred. Please contact us by raising an <a href="https://github.com/ICA-EGAD/RiC-ResourceList/issues">Issue</a> at GitHub, or otherwise. We will look into it as soon as we can!</p>
      <p class="return-to-resource-list"><a href="./index.html">Return to the resource list</a></p>
    </div>"#;

fn add_menu(add_resource_path: &str, icons_path: &str) -> String {
    format!(
        r#"      <span class="add-edit-menu">
        <a href="{add_resource_path}/add_resource.html" class="add-or-edit-link"><figure><img class="icon" src="{icons_path}/add.svg" alt="Add resource" id="add-resource" title="Add a resource to the list"/><figcaption>Add</figcaption></figure></a>
      </span>"#
    )
}

fn edit_menu(edits_path: &str, resource_id: &str, icons_path: &str) -> String {
    format!(
        r#"      <span class="add-edit-menu">
        <a href="{edits_path}/{resource_id}.html" class="add-or-edit-link"><figure><img class="icon" src="{icons_path}/edit.svg" alt="Edit resource" title="Edit the resource"/><figcaption>Edit</figcaption></figure></a>
      </span>"#
    )
}

fn filter_caption(kind: ResourceType) -> &'static str {
    match kind {
        ResourceType::Article => "Articles",
        ResourceType::Dataset => "Datasets",
        ResourceType::Event => "Events",
        ResourceType::Thesis => "Theses",
        ResourceType::Tool => "Tools",
        ResourceType::WebApplication => "Apps",
    }
}

fn filter_alt(kind: ResourceType) -> &'static str {
    match kind {
        ResourceType::Article => "Articles",
        ResourceType::Dataset => "Datasets",
        ResourceType::Event => "Events",
        ResourceType::Thesis => "Theses",
        ResourceType::Tool => "Tools",
        ResourceType::WebApplication => "Applications",
    }
}

fn filter_tooltip(kind: ResourceType) -> &'static str {
    match kind {
        ResourceType::Article => "Journal articles discussing RiC",
        ResourceType::Dataset => "Datasets in RDF, OWL, or other formats in which RiC is involved",
        ResourceType::Event => "Conferences, workshops, etc, in which RiC is a topic",
        ResourceType::Thesis => {
            "Theses (doctoral, master, ...) which have RiC as their subject (at least partly)"
        }
        ResourceType::Tool => {
            "Software, APIs, libraries, etc, which may be useful when working with RiC"
        }
        ResourceType::WebApplication => {
            "Applications, e.g. on the web, which make use of RiC in their implementation"
        }
    }
}

/// The filter menu. On the list page every entry points into the
/// filterings directory; on a filtering page the active type points back
/// to the full list and the inactive icons are grayed out.
fn filter_menu(active: Option<ResourceType>, icons_path: &str, path_of: impl Fn(ResourceType) -> String) -> String {
    let components: Vec<String> = ResourceType::ALL
        .into_iter()
        .map(|kind| {
            let css_class = match active {
                Some(current) if current != kind => "icon inline-icon-grayscale",
                _ => "icon",
            };
            format!(
                r#"        <a href="{path}" class="filter-link"><figure><img class="{css_class}" src="{icons_path}/{icon}" alt="{alt}" id="filter-{slug}" title="{tooltip}"/><figcaption>{caption}</figcaption></figure></a>"#,
                path = path_of(kind),
                css_class = css_class,
                icons_path = icons_path,
                icon = kind.icon(),
                alt = filter_alt(kind),
                slug = kind.filter_slug(),
                tooltip = filter_tooltip(kind),
                caption = filter_caption(kind),
            )
        })
        .collect();
    format!(
        "      <span class=\"filter-menu\">\n{}\n      </span>",
        components.join("\n")
    )
}

fn resource_list_content(entries: &[ListEntry], last_updated: &str) -> String {
    let list_entries: String = entries
        .iter()
        .map(|entry| format!("\n        {}", entry.html))
        .collect();
    format!(
        r#"    <div class="resource-list" id="resource-list">
      <ul class="resource-list">{list_entries}
      </ul>
    </div>
    <div class="last-updated">
      <p>Last updated: <span class="last-updated-timestamp">{last_updated}</span></p>
    </div>"#
    )
}

/// The landing page: the full reverse-chronological list.
pub fn resource_list_page(entries: &[ListEntry], layout: &SiteLayout, last_updated: &str) -> String {
    render_page(&PageShell {
        css_path: &layout.css_file,
        logo_path: &layout.logo_file,
        resource_list_path: "",
        introduction: LIST_INTRODUCTION,
        add_or_edit_menu: &add_menu(".", &layout.icons_directory),
        filter_menu: &filter_menu(None, &layout.icons_directory, |kind| {
            format!("{}/{}.html", layout.filterings_directory, kind.filter_slug())
        }),
        content: &resource_list_content(entries, last_updated),
    })
}

/// A filtering page: the list narrowed to one resource kind.
///
/// `entries` is the full composed sequence; filtering preserves its order.
pub fn filtering_page(
    entries: &[ListEntry],
    active: ResourceType,
    layout: &SiteLayout,
    last_updated: &str,
) -> String {
    let filtered = filter_by_type(entries, active);
    let icons_path = format!("../{}", layout.icons_directory);
    render_page(&PageShell {
        css_path: &format!("../{}", layout.css_file),
        logo_path: &format!("../{}", layout.logo_file),
        resource_list_path: "../index.html",
        introduction: LIST_INTRODUCTION,
        add_or_edit_menu: &add_menu("..", &icons_path),
        filter_menu: &filter_menu(Some(active), &icons_path, |kind| {
            if kind == active {
                "../index.html".to_string()
            } else {
                format!("{}.html", kind.filter_slug())
            }
        }),
        content: &resource_list_content(&filtered, last_updated),
    })
}

/// The detail page of one record.
pub fn resource_details_page(record: &Record, layout: &SiteLayout) -> GrammarResult<String> {
    let paths = FragmentPaths::in_subdirectory(layout);
    let content = detail_fragment(record, &paths)?;
    Ok(render_page(&PageShell {
        css_path: &format!("../{}", layout.css_file),
        logo_path: &format!("../{}", layout.logo_file),
        resource_list_path: "../index.html",
        introduction: DETAILS_INTRODUCTION,
        add_or_edit_menu: &edit_menu(
            &format!("../{}", layout.edits_directory),
            &record.id,
            &paths.icons,
        ),
        filter_menu: "",
        content: &content,
    }))
}

/// The page with the blank form for adding a resource.
pub fn add_resource_page(backend_url: &str, layout: &SiteLayout) -> String {
    render_page(&PageShell {
        css_path: &layout.css_file,
        logo_path: &layout.logo_file,
        resource_list_path: "index.html",
        introduction: ADD_INTRODUCTION,
        add_or_edit_menu: "",
        filter_menu: "",
        content: &blank_form(backend_url),
    })
}

/// The page with the form for editing one record, prefilled from it.
pub fn edit_resource_page(record: &Record, backend_url: &str, layout: &SiteLayout) -> String {
    render_page(&PageShell {
        css_path: &format!("../{}", layout.css_file),
        logo_path: &format!("../{}", layout.logo_file),
        resource_list_path: "../index.html",
        introduction: EDIT_INTRODUCTION,
        add_or_edit_menu: "",
        filter_menu: "",
        content: &prefilled_form(record, backend_url),
    })
}

/// The page shown after a successful submission.
pub fn success_page(action: SubmissionAction, layout: &SiteLayout) -> String {
    let content = format!(
        r#"    <div class="success">
      <p>Resource {action} successfully submitted! A pull request should in the next few minutes be generated <a href="https://github.com/ICA-EGAD/RiC-ResourceList/pulls">at GitHub</a>, which EGAD will review. Once the pull request is approved (it may take a few days for us to get to it!), the submission will be deployed to the resource list and become visible there.</p>
      <p class="return-to-resource-list"><a href="./index.html">Return to the resource list</a></p>
    </div>"#,
        action = action.word()
    );
    render_page(&PageShell {
        css_path: &layout.css_file,
        logo_path: &layout.logo_file,
        resource_list_path: "./index.html",
        introduction: "",
        add_or_edit_menu: "",
        filter_menu: "",
        content: &content,
    })
}

/// The page shown after a failed submission.
pub fn failure_page(layout: &SiteLayout) -> String {
    render_page(&PageShell {
        css_path: &layout.css_file,
        logo_path: &layout.logo_file,
        resource_list_path: "./index.html",
        introduction: "",
        add_or_edit_menu: "",
        filter_menu: "",
        content: FAILURE_CONTENT,
    })
}
