//! Country catalog
//!
//! An alphabetically ordered, deduplicated list of country display names built
//! once from region data. A guess's position in this list is what the
//! distance hints are measured in.

use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::fmt;

/// A guessable country: its region code and display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryEntry {
    code: String,
    name: String,
}

impl CountryEntry {
    /// Region code (ISO 3166-1 alpha-2 for the embedded table)
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name, the text players type
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for CountryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Ordered list of guessable countries with an exact-name index
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CountryEntry>,
    by_name: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from `(code, display name)` rows
    ///
    /// Rows without a display name are skipped, as are names already taken by
    /// an earlier row. The remaining entries are sorted with [`collate`].
    ///
    /// # Examples
    /// ```
    /// use country_guess::core::Catalog;
    ///
    /// let catalog = Catalog::build([
    ///     ("FR", Some("France")),
    ///     ("TD", Some("Chad")),
    ///     ("XX", None),
    /// ]);
    /// assert_eq!(catalog.len(), 2);
    /// assert_eq!(catalog.find("Chad"), Some(0));
    /// ```
    pub fn build<'r, I>(regions: I) -> Self
    where
        I: IntoIterator<Item = (&'r str, Option<&'r str>)>,
    {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut entries: Vec<CountryEntry> = regions
            .into_iter()
            .filter_map(|(code, name)| {
                let name = name.map(str::trim).filter(|n| !n.is_empty())?;
                seen.insert(name).then(|| CountryEntry {
                    code: code.to_string(),
                    name: name.to_string(),
                })
            })
            .collect();

        entries.sort_by(|a, b| collate(&a.name, &b.name));

        let by_name = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.name.clone(), i))
            .collect();

        Self { entries, by_name }
    }

    /// Position of the entry whose name matches `name` exactly (case-sensitive)
    #[must_use]
    pub fn find(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CountryEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn entries(&self) -> &[CountryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Draw a uniformly random position, or `None` for an empty catalog
    pub fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        (!self.entries.is_empty()).then(|| rng.random_range(0..self.entries.len()))
    }
}

/// Compare two display names the way a reader expects an index to be ordered
///
/// Primary comparison ignores case and Latin diacritics ("Åland Islands" files
/// under A, "Côte d’Ivoire" next to "Costa Rica"). Names equal at that level
/// fall back to plain string order so the result is total and deterministic.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = a.chars().flat_map(fold).cmp(b.chars().flat_map(fold));
    primary.then_with(|| a.cmp(b))
}

/// Primary collation weight of a character: lowercase with diacritics removed
fn fold(c: char) -> impl Iterator<Item = char> {
    let folded: &'static str = match c {
        'À'..='Å' | 'à'..='å' | 'Ā' | 'ā' => "a",
        'Æ' | 'æ' => "ae",
        'Ç' | 'ç' | 'Č' | 'č' => "c",
        'È'..='Ë' | 'è'..='ë' | 'Ē' | 'ē' => "e",
        'Ì'..='Ï' | 'ì'..='ï' | 'Ī' | 'ī' => "i",
        'Ñ' | 'ñ' => "n",
        'Ò'..='Ö' | 'Ø' | 'ò'..='ö' | 'ø' | 'Ō' | 'ō' => "o",
        'Ù'..='Ü' | 'ù'..='ü' | 'Ū' | 'ū' => "u",
        'Ý' | 'ý' | 'ÿ' => "y",
        'ß' => "ss",
        'Š' | 'š' => "s",
        'Ž' | 'ž' => "z",
        '’' | '‘' => "'",
        _ => "",
    };

    let mut single = None;
    if folded.is_empty() {
        single = Some(c.to_lowercase());
    }
    folded.chars().chain(single.into_iter().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn names(catalog: &Catalog) -> Vec<&str> {
        catalog.entries().iter().map(CountryEntry::name).collect()
    }

    #[test]
    fn build_sorts_by_name() {
        let catalog = Catalog::build([
            ("ES", Some("Spain")),
            ("TD", Some("Chad")),
            ("FR", Some("France")),
        ]);
        assert_eq!(names(&catalog), ["Chad", "France", "Spain"]);
        assert_eq!(catalog.get(1).map(CountryEntry::code), Some("FR"));
    }

    #[test]
    fn build_skips_codes_without_names() {
        let catalog = Catalog::build([
            ("AN", None),
            ("FR", Some("France")),
            ("CS", Some("   ")),
        ]);
        assert_eq!(names(&catalog), ["France"]);
    }

    #[test]
    fn build_removes_duplicate_names() {
        let catalog = Catalog::build([
            ("FR", Some("France")),
            ("FX", Some("France")),
            ("TD", Some("Chad")),
        ]);
        assert_eq!(catalog.len(), 2);
        let france = catalog.find("France").unwrap();
        assert_eq!(catalog.get(france).unwrap().code(), "FR");
    }

    #[test]
    fn build_is_deterministic() {
        let rows = [
            ("AX", Some("Åland Islands")),
            ("AL", Some("Albania")),
            ("ZW", Some("Zimbabwe")),
        ];
        assert_eq!(names(&Catalog::build(rows)), names(&Catalog::build(rows)));
    }

    #[test]
    fn collation_ignores_diacritics() {
        let catalog = Catalog::build([
            ("ZW", Some("Zimbabwe")),
            ("AX", Some("Åland Islands")),
            ("AL", Some("Albania")),
            ("AF", Some("Afghanistan")),
        ]);
        assert_eq!(
            names(&catalog),
            ["Afghanistan", "Åland Islands", "Albania", "Zimbabwe"]
        );
    }

    #[test]
    fn collation_places_cote_divoire_after_costa_rica() {
        assert_eq!(collate("Costa Rica", "Côte d’Ivoire"), Ordering::Less);
        assert_eq!(collate("Côte d’Ivoire", "Croatia"), Ordering::Less);
    }

    #[test]
    fn collation_ignores_case_at_primary_level() {
        assert_eq!(collate("bahamas", "Bahrain"), Ordering::Less);
        assert_eq!(collate("Chad", "chad"), Ordering::Less);
    }

    #[test]
    fn find_is_case_sensitive() {
        let catalog = Catalog::build([("FR", Some("France"))]);
        assert_eq!(catalog.find("France"), Some(0));
        assert_eq!(catalog.find("france"), None);
        assert_eq!(catalog.find("France "), None);
    }

    #[test]
    fn random_index_stays_in_range() {
        let catalog = Catalog::build([
            ("TD", Some("Chad")),
            ("FR", Some("France")),
            ("ES", Some("Spain")),
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let index = catalog.random_index(&mut rng).unwrap();
            assert!(index < catalog.len());
        }
    }

    #[test]
    fn random_index_of_empty_catalog_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Catalog::default().random_index(&mut rng), None);
    }
}
