use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::catalog;

/// Installed GTK themes, icon themes, cursor themes, and curated fonts.
/// Lists are sorted and duplicate-free.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeInventory {
    pub themes: Vec<String>,
    pub icon_themes: Vec<String>,
    pub cursor_themes: Vec<String>,
    pub fonts: Vec<String>,
}

/// List theme and icon directory entries across the system-wide and per-user
/// locations. Cursor themes are the icon entries whose name mentions
/// "cursor". Fonts are filled in separately by the aggregator.
pub async fn collect() -> ThemeInventory {
    let themes = entry_names(theme_dirs()).await;
    let icons = entry_names(icon_dirs()).await;
    let cursors = cursor_names(&icons);

    ThemeInventory {
        themes: themes.into_iter().collect(),
        icon_themes: icons.into_iter().collect(),
        cursor_themes: cursors,
        fonts: Vec::new(),
    }
}

fn theme_dirs() -> Vec<PathBuf> {
    with_user_dir(catalog::SYSTEM_THEME_DIR, ".themes")
}

fn icon_dirs() -> Vec<PathBuf> {
    with_user_dir(catalog::SYSTEM_ICON_DIR, ".icons")
}

fn with_user_dir(system_dir: &str, user_dir: &str) -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(system_dir)];
    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(user_dir));
    }
    locations
}

/// Union of entry names across the given directories; missing directories
/// are silently skipped.
async fn entry_names(directories: Vec<PathBuf>) -> BTreeSet<String> {
    let mut names = BTreeSet::new();

    for dir in directories {
        let Ok(mut entries) = tokio::fs::read_dir(&dir).await else {
            continue;
        };
        while let Ok(Some(entry)) = entries.next_entry().await {
            if let Some(name) = entry.file_name().to_str() {
                names.insert(name.to_string());
            }
        }
    }

    names
}

fn cursor_names(icons: &BTreeSet<String>) -> Vec<String> {
    icons
        .iter()
        .filter(|name| name.to_lowercase().contains("cursor"))
        .cloned()
        .collect()
}
