//! Command-line interface for the resource list.
//! This binary generates the HTML pages of the site from the master
//! document, and applies form submissions to the master document.
//!
//! Usage:
//!   reslist resource-list <master>      - Landing page to stdout
//!   reslist resource-details <master>   - Detail pages (RESOURCE_DETAILS_PATH)
//!   reslist filterings <master>         - Per-type pages (FILTERINGS_PATH)
//!   reslist add-resource                - Add form to stdout (BACKEND_URL)
//!   reslist edit-resource <master>      - Edit forms (EDITS_PATH, BACKEND_URL)
//!   reslist success <addition|edit>     - Post-submission page to stdout
//!   reslist failure                     - Submission-failure page to stdout
//!   reslist record add|edit <form>      - Apply a form submission

mod commands;

use std::path::{Path, PathBuf};

use clap::{Arg, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

use commands::AppResult;
use reslist_config::{Loader, ReslistConfig};
use reslist_site::SubmissionAction;

fn master_document_arg() -> Arg {
    Arg::new("path_to_master_document")
        .help("Path to the CSV master document for the resource list")
        .value_parser(clap::value_parser!(PathBuf))
        .required(true)
        .index(1)
}

fn form_submission_arg() -> Arg {
    Arg::new("form_submission")
        .help("The string sent in the body of a form submission POST from the resource list")
        .required(true)
        .index(1)
}

fn cli() -> Command {
    Command::new("reslist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates the HTML pages of the resource-list site from the master document")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .subcommand(
            Command::new("resource-list")
                .about(
                    "Generate the landing page with the summary resource list. \
                     Outputs the HTML of the page to stdout",
                )
                .arg(master_document_arg()),
        )
        .subcommand(
            Command::new("resource-details")
                .about(
                    "Generate the individual pages with details of the resources. \
                     The environment variable RESOURCE_DETAILS_PATH must be provided, \
                     a directory to write the generated pages to",
                )
                .arg(master_document_arg()),
        )
        .subcommand(
            Command::new("filterings")
                .about(
                    "Generate pages which are filterings of the summary resource list \
                     by resource type. The environment variable FILTERINGS_PATH must be \
                     provided, a directory to write the generated pages to",
                )
                .arg(master_document_arg()),
        )
        .subcommand(Command::new("add-resource").about(
            "Generate the page for adding a resource. Outputs the HTML of the page \
             to stdout. The environment variable BACKEND_URL must be provided, the \
             endpoint the submission form POSTs to",
        ))
        .subcommand(
            Command::new("edit-resource")
                .about(
                    "Generate the pages for editing a resource. The environment \
                     variables EDITS_PATH (a directory to write the generated pages \
                     to) and BACKEND_URL (the endpoint the form POSTs to) must be \
                     provided",
                )
                .arg(master_document_arg()),
        )
        .subcommand(
            Command::new("success")
                .about(
                    "Generate the page redirected to upon successful submission of an \
                     addition or edit. Outputs the HTML of the page to stdout",
                )
                .arg(
                    Arg::new("action")
                        .help("Whether the success page is for an addition or an edit")
                        .value_parser(["addition", "edit"])
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("failure").about(
            "Generate the page redirected to upon failure of the submission of an \
             addition or edit. Outputs the HTML of the page to stdout",
        ))
        .subcommand(
            Command::new("record")
                .about("Apply a form submission to the master document")
                .subcommand_required(true)
                .arg(
                    Arg::new("master")
                        .long("master")
                        .help("Master document to mutate (defaults to the configured path)")
                        .value_parser(clap::value_parser!(PathBuf))
                        .global(true),
                )
                .subcommand(
                    Command::new("add")
                        .about("Append a submitted resource, assigning the next id")
                        .arg(form_submission_arg()),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Replace the row named by an edit submission")
                        .arg(form_submission_arg()),
                ),
        )
}

fn load_config(matches: &ArgMatches) -> AppResult<ReslistConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    Ok(loader.with_env().build()?)
}

fn master_document(matches: &ArgMatches) -> &Path {
    matches
        .get_one::<PathBuf>("path_to_master_document")
        .expect("the master document argument is required")
        .as_path()
}

fn run(matches: &ArgMatches) -> AppResult<()> {
    let config = load_config(matches)?;
    match matches.subcommand() {
        Some(("resource-list", sub)) => {
            commands::generate_resource_list(master_document(sub), &config)
        }
        Some(("resource-details", sub)) => {
            commands::generate_resource_details(master_document(sub), &config)
        }
        Some(("filterings", sub)) => commands::generate_filterings(master_document(sub), &config),
        Some(("add-resource", _)) => commands::generate_add_resource(&config),
        Some(("edit-resource", sub)) => commands::generate_edits(master_document(sub), &config),
        Some(("success", sub)) => {
            let action = match sub
                .get_one::<String>("action")
                .expect("the action argument is required")
                .as_str()
            {
                "edit" => SubmissionAction::Edit,
                _ => SubmissionAction::Addition,
            };
            commands::generate_success(action, &config)
        }
        Some(("failure", _)) => commands::generate_failure(&config),
        Some(("record", sub)) => {
            let master = sub
                .get_one::<PathBuf>("master")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(&config.store.master_document));
            match sub.subcommand() {
                Some(("add", action)) => commands::record_add(
                    &master,
                    action
                        .get_one::<String>("form_submission")
                        .expect("the form submission argument is required"),
                ),
                Some(("edit", action)) => commands::record_edit(
                    &master,
                    action
                        .get_one::<String>("form_submission")
                        .expect("the form submission argument is required"),
                ),
                _ => unreachable!("a record subcommand is required"),
            }
        }
        _ => unreachable!("a subcommand is required"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let matches = cli().get_matches();
    if let Err(error) = run(&matches) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
