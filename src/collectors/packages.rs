use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use super::run_command;
use crate::catalog;

/// Installed packages per category. Every category key is always present,
/// with an empty list when nothing from its candidate set is installed.
pub async fn collect() -> BTreeMap<String, Vec<String>> {
    let installed = installed_set().await;

    catalog::PACKAGE_CATEGORIES
        .iter()
        .map(|(category, candidates)| (category.to_string(), filter_installed(candidates, &installed)))
        .collect()
}

/// Names of all installed packages: union of the pacman manifest files, or
/// `pacman -Q` when no manifest yields anything, or empty when both sources
/// fail.
async fn installed_set() -> HashSet<String> {
    installed_from_sources(catalog::PACKAGE_MANIFESTS, || async {
        run_command("pacman", &["-Q"]).await
    })
    .await
}

/// Source chain behind [`installed_set`]. The query-all command is only
/// consulted when every manifest is empty or absent.
async fn installed_from_sources<F, Fut>(manifest_paths: &[&str], query_all: F) -> HashSet<String>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Option<String>>,
{
    let mut installed = HashSet::new();

    for path in manifest_paths {
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => {
                installed.extend(contents.lines().filter(|l| !l.is_empty()).map(str::to_string));
            }
            Err(e) => debug!(path, error = %e, "package manifest unreadable"),
        }
    }

    if installed.is_empty() {
        if let Some(listing) = query_all().await {
            installed.extend(
                listing
                    .lines()
                    .filter_map(|line| line.split_whitespace().next())
                    .map(str::to_string),
            );
        }
    }

    installed
}

/// Candidate-list order is preserved; the installed set only decides
/// membership.
fn filter_installed(candidates: &[&str], installed: &HashSet<String>) -> Vec<String> {
    candidates
        .iter()
        .filter(|name| installed.contains(**name))
        .map(|name| name.to_string())
        .collect()
}
