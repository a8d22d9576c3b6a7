//! Catalog listing command

use crate::core::{Catalog, CountryEntry};

/// Catalog entries with their positions, optionally limited to a name prefix
///
/// The prefix match ignores case so `--prefix s` finds "Spain" and "St. Lucia".
#[must_use]
pub fn list_countries<'a>(catalog: &'a Catalog, prefix: Option<&str>) -> Vec<(usize, &'a CountryEntry)> {
    let prefix = prefix.map(str::to_lowercase);
    catalog
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            prefix
                .as_deref()
                .is_none_or(|p| entry.name().to_lowercase().starts_with(p))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::build([
            ("TD", Some("Chad")),
            ("FR", Some("France")),
            ("ES", Some("Spain")),
            ("LC", Some("St. Lucia")),
        ])
    }

    #[test]
    fn lists_everything_without_prefix() {
        let catalog = catalog();
        let listed = list_countries(&catalog, None);
        assert_eq!(listed.len(), 4);
        assert_eq!(listed[0].0, 0);
        assert_eq!(listed[3].1.name(), "St. Lucia");
    }

    #[test]
    fn prefix_filter_keeps_catalog_positions() {
        let catalog = catalog();
        let listed = list_countries(&catalog, Some("s"));
        let found: Vec<(usize, &str)> = listed.iter().map(|(i, e)| (*i, e.name())).collect();
        assert_eq!(found, [(2, "Spain"), (3, "St. Lucia")]);
    }

    #[test]
    fn unmatched_prefix_lists_nothing() {
        let catalog = catalog();
        assert!(list_countries(&catalog, Some("Zz")).is_empty());
    }
}
