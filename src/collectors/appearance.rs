use serde::Serialize;
use tracing::debug;

use super::{or_unknown, run_command};
use crate::catalog;

/// Desktop interface settings: font, GTK theme, icon theme, cursor theme.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    pub font: String,
    pub theme: String,
    pub icon_theme: String,
    pub cursor_theme: String,
}

/// Read the four interface settings from gsettings; if any lookup fails the
/// whole probe falls back to environment variables. Individual empty values
/// still collapse to "Unknown".
pub async fn collect() -> Appearance {
    let lookups = [
        interface_setting("font-name").await,
        interface_setting("gtk-theme").await,
        interface_setting("icon-theme").await,
        interface_setting("cursor-theme").await,
    ];
    appearance_from(lookups, |var| std::env::var(var).ok())
}

/// All-or-nothing: one failed gsettings lookup discards them all in favor of
/// the environment variables.
fn appearance_from(
    lookups: [Option<String>; 4],
    env: impl Fn(&str) -> Option<String>,
) -> Appearance {
    match from_settings(lookups) {
        Some(appearance) => appearance,
        None => {
            debug!("gsettings unavailable, using environment variables");
            from_environment(env)
        }
    }
}

fn from_settings(lookups: [Option<String>; 4]) -> Option<Appearance> {
    let [font, theme, icon_theme, cursor_theme] = lookups;

    Some(Appearance {
        font: or_unknown(font?),
        theme: or_unknown(theme?),
        icon_theme: or_unknown(icon_theme?),
        cursor_theme: or_unknown(cursor_theme?),
    })
}

async fn interface_setting(key: &str) -> Option<String> {
    run_command("gsettings", &["get", catalog::INTERFACE_SCHEMA, key])
        .await
        .map(|value| unquote(&value).to_string())
}

fn from_environment(env: impl Fn(&str) -> Option<String>) -> Appearance {
    let setting = |var: &str| or_unknown(env(var).unwrap_or_default());

    Appearance {
        font: setting("GTK_FONT"),
        theme: setting("GTK_THEME"),
        icon_theme: setting("GTK_ICON_THEME"),
        cursor_theme: setting("XCURSOR_THEME"),
    }
}

/// gsettings prints GVariant strings wrapped in single quotes.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn settings_backend_values_win() {
        let appearance = appearance_from(
            [
                Some("Cantarell 11".into()),
                Some("Adwaita".into()),
                Some("Papirus".into()),
                Some("Bibata-Modern".into()),
            ],
            |_| Some("from-env".into()),
        );
        assert_eq!(appearance.font, "Cantarell 11");
        assert_eq!(appearance.theme, "Adwaita");
        assert_eq!(appearance.icon_theme, "Papirus");
        assert_eq!(appearance.cursor_theme, "Bibata-Modern");
    }

    #[test]
    fn one_failed_lookup_drops_all_to_environment() {
        let appearance = appearance_from(
            [
                Some("Cantarell 11".into()),
                Some("Adwaita".into()),
                None,
                Some("Bibata-Modern".into()),
            ],
            |var| (var == "GTK_THEME").then(|| "Nordic".to_string()),
        );
        // Resolved gsettings values are discarded wholesale.
        assert_eq!(appearance.font, "Unknown");
        assert_eq!(appearance.theme, "Nordic");
        assert_eq!(appearance.icon_theme, "Unknown");
        assert_eq!(appearance.cursor_theme, "Unknown");
    }

    #[test]
    fn empty_backend_values_collapse_to_unknown() {
        let appearance = appearance_from(
            [
                Some(String::new()),
                Some("Adwaita".into()),
                Some(String::new()),
                Some("Bibata-Modern".into()),
            ],
            no_env,
        );
        assert_eq!(appearance.font, "Unknown");
        assert_eq!(appearance.theme, "Adwaita");
        assert_eq!(appearance.icon_theme, "Unknown");
    }

    #[test]
    fn environment_rendition_defaults_to_unknown() {
        let appearance = from_environment(|var| match var {
            "XCURSOR_THEME" => Some("capitaine-cursors".to_string()),
            "GTK_FONT" => Some(String::new()),
            _ => None,
        });
        assert_eq!(appearance.font, "Unknown");
        assert_eq!(appearance.theme, "Unknown");
        assert_eq!(appearance.icon_theme, "Unknown");
        assert_eq!(appearance.cursor_theme, "capitaine-cursors");
    }

    #[test]
    fn unquote_strips_gvariant_quotes() {
        assert_eq!(unquote("'Adwaita'"), "Adwaita");
    }

    #[test]
    fn unquote_leaves_bare_values() {
        assert_eq!(unquote("Adwaita"), "Adwaita");
    }

    #[test]
    fn unquote_keeps_unbalanced_quotes() {
        assert_eq!(unquote("'Adwaita"), "'Adwaita");
    }
}
