//! File and directory names of the generated site.

use serde::Deserialize;

/// Where the generated pages point at each other and at static assets.
///
/// All values are names relative to the site root; fragments rendered for
/// a page inside a subdirectory prefix them with `../` as needed.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteLayout {
    pub css_file: String,
    pub logo_file: String,
    pub icons_directory: String,
    pub resource_details_directory: String,
    pub edits_directory: String,
    pub filterings_directory: String,
}

impl Default for SiteLayout {
    fn default() -> Self {
        SiteLayout {
            css_file: "ric_resources.css".to_string(),
            logo_file: "EGAD_logo.svg".to_string(),
            icons_directory: "icons".to_string(),
            resource_details_directory: "resource-details".to_string(),
            edits_directory: "edits".to_string(),
            filterings_directory: "filterings".to_string(),
        }
    }
}

/// Paths a fragment links out to, relative to the page being generated.
#[derive(Debug, Clone)]
pub struct FragmentPaths {
    pub icons: String,
    pub resource_details: String,
}

impl FragmentPaths {
    /// Paths for a page at the site root (the resource list itself).
    pub fn at_site_root(layout: &SiteLayout) -> FragmentPaths {
        FragmentPaths {
            icons: layout.icons_directory.clone(),
            resource_details: layout.resource_details_directory.clone(),
        }
    }

    /// Paths for a page one directory below the site root (detail pages,
    /// filterings, edit pages).
    pub fn in_subdirectory(layout: &SiteLayout) -> FragmentPaths {
        FragmentPaths {
            icons: format!("../{}", layout.icons_directory),
            resource_details: format!("../{}", layout.resource_details_directory),
        }
    }
}
