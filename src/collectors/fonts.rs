use std::collections::BTreeSet;

use super::run_command;
use crate::catalog;

/// Curated list of installed font families: bundled system fonts are
/// excluded, and of the rest only families on the notable allow-list are
/// reported, sorted and duplicate-free.
pub async fn collect() -> Vec<String> {
    match run_command("fc-list", &[":family"]).await {
        Some(listing) => curate(listing.lines()),
        None => Vec::new(),
    }
}

fn curate<'a>(families: impl Iterator<Item = &'a str>) -> Vec<String> {
    let unique: BTreeSet<&str> = families.filter(|f| !f.is_empty()).collect();

    unique
        .into_iter()
        .filter(|family| {
            let lower = family.to_lowercase();
            let excluded = catalog::FONT_EXCLUDE_TERMS.iter().any(|t| lower.contains(t));
            let notable = catalog::FONT_ALLOW_TERMS.iter().any(|t| lower.contains(t));
            !excluded && notable
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_fonts_are_excluded() {
        let fonts = curate(["Noto Sans", "JetBrains Mono", "DejaVu Sans"].into_iter());
        assert_eq!(fonts, vec!["JetBrains Mono"]);
    }

    #[test]
    fn only_notable_fonts_survive() {
        let fonts = curate(["Cantarell", "Fira Code", "Comic Relief"].into_iter());
        assert_eq!(fonts, vec!["Fira Code"]);
    }

    #[test]
    fn exclude_beats_allow() {
        // A family matching both lists is dropped.
        let fonts = curate(["Ubuntu Source Pro"].into_iter());
        assert!(fonts.is_empty());
    }

    #[test]
    fn output_is_sorted_and_deduplicated() {
        let fonts = curate(["Roboto", "Fira Code", "Roboto", "Hack"].into_iter());
        assert_eq!(fonts, vec!["Fira Code", "Hack", "Roboto"]);
    }
}
