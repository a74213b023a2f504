//! The work behind each subcommand.
//!
//! Page generation is batch-atomic: commands that write one file per
//! record render every page before writing the first, so a grammar error
//! in any row leaves the output directory untouched.

use std::fs;
use std::path::Path;

use chrono::Utc;
use tracing::info;

use reslist_config::ReslistConfig;
use reslist_grammar::ResourceType;
use reslist_site::{
    add_resource_page, compose, edit_resource_page, failure_page, filtering_page,
    resource_details_page, resource_list_page, success_page, FragmentPaths, SubmissionAction,
};
use reslist_store::{append_resource, edit_resource, parse_submission, read_records};

pub type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn last_updated() -> String {
    Utc::now().format("%Y-%m-%d %H:%M (GMT)").to_string()
}

fn required_env(name: &str) -> AppResult<String> {
    std::env::var(name)
        .map_err(|_| format!("The environment variable {name} must be set").into())
}

/// `resource-list`: the landing page, to stdout.
pub fn generate_resource_list(master: &Path, config: &ReslistConfig) -> AppResult<()> {
    let records = read_records(master)?;
    let paths = FragmentPaths::at_site_root(&config.site);
    let entries = compose(&records, &paths)?;
    print!(
        "{}",
        resource_list_page(&entries, &config.site, &last_updated())
    );
    Ok(())
}

/// `resource-details`: one page per record, into RESOURCE_DETAILS_PATH.
pub fn generate_resource_details(master: &Path, config: &ReslistConfig) -> AppResult<()> {
    let output_directory = required_env("RESOURCE_DETAILS_PATH")?;
    let records = read_records(master)?;
    let mut pages = Vec::with_capacity(records.len());
    for record in &records {
        pages.push((
            record.id.clone(),
            resource_details_page(record, &config.site)?,
        ));
    }
    let output_directory = Path::new(&output_directory);
    for (id, page) in &pages {
        fs::write(output_directory.join(format!("{id}.html")), page)?;
    }
    info!(count = pages.len(), "wrote resource detail pages");
    Ok(())
}

/// `filterings`: one narrowed list page per resource kind, into
/// FILTERINGS_PATH.
pub fn generate_filterings(master: &Path, config: &ReslistConfig) -> AppResult<()> {
    let output_directory = required_env("FILTERINGS_PATH")?;
    let records = read_records(master)?;
    let paths = FragmentPaths::in_subdirectory(&config.site);
    let entries = compose(&records, &paths)?;
    let stamp = last_updated();
    let output_directory = Path::new(&output_directory);
    for kind in ResourceType::ALL {
        let page = filtering_page(&entries, kind, &config.site, &stamp);
        fs::write(
            output_directory.join(format!("{}.html", kind.filter_slug())),
            page,
        )?;
    }
    info!("wrote filtering pages");
    Ok(())
}

/// `add-resource`: the page with the blank submission form, to stdout.
pub fn generate_add_resource(config: &ReslistConfig) -> AppResult<()> {
    let backend_url = required_env("BACKEND_URL")?;
    print!("{}", add_resource_page(&backend_url, &config.site));
    Ok(())
}

/// `edit-resource`: one prefilled form page per record, into EDITS_PATH.
pub fn generate_edits(master: &Path, config: &ReslistConfig) -> AppResult<()> {
    let backend_url = required_env("BACKEND_URL")?;
    let output_directory = required_env("EDITS_PATH")?;
    let records = read_records(master)?;
    let output_directory = Path::new(&output_directory);
    for record in &records {
        let page = edit_resource_page(record, &backend_url, &config.site);
        fs::write(output_directory.join(format!("{}.html", record.id)), page)?;
    }
    info!(count = records.len(), "wrote edit pages");
    Ok(())
}

/// `success`: the post-submission page, to stdout.
pub fn generate_success(action: SubmissionAction, config: &ReslistConfig) -> AppResult<()> {
    print!("{}", success_page(action, &config.site));
    Ok(())
}

/// `failure`: the submission-failure page, to stdout.
pub fn generate_failure(config: &ReslistConfig) -> AppResult<()> {
    print!("{}", failure_page(&config.site));
    Ok(())
}

/// `record add`: append a form submission to the master document.
pub fn record_add(master: &Path, form_submission: &str) -> AppResult<()> {
    let submission = parse_submission(form_submission);
    let appended = append_resource(master, &submission)?;
    info!(id = %appended.id, "resource added to the master document");
    Ok(())
}

/// `record edit`: apply an edit submission to the master document.
pub fn record_edit(master: &Path, form_submission: &str) -> AppResult<()> {
    let submission = parse_submission(form_submission);
    let edited = edit_resource(master, &submission)?;
    info!(id = %edited.id, "resource edited in the master document");
    Ok(())
}
