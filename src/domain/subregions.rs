//! Fixed country-name to subregion table.
//!
//! Entries are kept sorted by name (byte order) so [`canonical_subregion`] can
//! binary-search the slice. The table is compiled in and is not configurable.

/// Sentinel subregion value marking a record as unassigned.
pub const PLACEHOLDER: &str = "Other";

pub const SUBREGION_UPDATES: &[(&str, &str)] = &[
    ("Afghanistan", "South Asia"),
    ("Andorra", "Southern Europe"),
    ("Angola", "Middle Africa"),
    ("Argentina", "South America"),
    ("Armenia", "Western Asia"),
    ("Australia", "Oceania"),
    ("Austria", "Western Europe"),
    ("Azerbaijan", "Western Asia"),
    ("Bangladesh", "South Asia"),
    ("Belarus", "Eastern Europe"),
    ("Belgium", "Western Europe"),
    ("Belize", "Central America"),
    ("Bhutan", "South Asia"),
    ("Bolivia", "South America"),
    ("Botswana", "Southern Africa"),
    ("Brazil", "South America"),
    ("Burundi", "Eastern Africa"),
    ("Cameroon", "Middle Africa"),
    ("Canada", "North America"),
    ("Central African Republic", "Middle Africa"),
    ("Chad", "Middle Africa"),
    ("Chile", "South America"),
    ("China", "Eastern Asia"),
    ("Colombia", "South America"),
    ("Comoros", "Eastern Africa"),
    ("Congo, Democratic Republic of the", "Middle Africa"),
    ("Congo, Republic of the", "Middle Africa"),
    ("Costa Rica", "Central America"),
    ("Cyprus", "Western Asia"),
    ("Czech Republic", "Eastern Europe"),
    ("Djibouti", "Eastern Africa"),
    ("East Timor", "Southeast Asia"),
    ("Ecuador", "South America"),
    ("El Salvador", "Central America"),
    ("Equatorial Guinea", "Middle Africa"),
    ("Eritrea", "Eastern Africa"),
    ("Estonia", "Northern Europe"),
    ("Eswatini", "Southern Africa"),
    ("Ethiopia", "Eastern Africa"),
    ("France", "Western Europe"),
    ("Gabon", "Middle Africa"),
    ("Germany", "Western Europe"),
    ("Greece", "Southern Europe"),
    ("Guatemala", "Central America"),
    ("Guyana", "South America"),
    ("Honduras", "Central America"),
    ("Hungary", "Eastern Europe"),
    ("India", "South Asia"),
    ("Ireland", "Northern Europe"),
    ("Italy", "Southern Europe"),
    ("Japan", "Eastern Asia"),
    ("Kenya", "Eastern Africa"),
    ("Latvia", "Northern Europe"),
    ("Lesotho", "Southern Africa"),
    ("Liechtenstein", "Western Europe"),
    ("Lithuania", "Northern Europe"),
    ("Luxembourg", "Western Europe"),
    ("Madagascar", "Eastern Africa"),
    ("Malawi", "Eastern Africa"),
    ("Maldives", "South Asia"),
    ("Malta", "Southern Europe"),
    ("Marshall Islands", "Micronesia"),
    ("Mauritius", "Eastern Africa"),
    ("Mexico", "North America"),
    ("Moldova", "Eastern Europe"),
    ("Monaco", "Western Europe"),
    ("Mongolia", "Eastern Asia"),
    ("Mozambique", "Eastern Africa"),
    ("Namibia", "Southern Africa"),
    ("Nepal", "South Asia"),
    ("Netherlands", "Western Europe"),
    ("New Zealand", "Oceania"),
    ("Nicaragua", "Central America"),
    ("Palestine", "Western Asia"),
    ("Panama", "Central America"),
    ("Paraguay", "South America"),
    ("Peru", "South America"),
    ("Poland", "Eastern Europe"),
    ("Portugal", "Southern Europe"),
    ("Romania", "Eastern Europe"),
    ("Russia", "Eastern Europe"),
    ("Rwanda", "Eastern Africa"),
    ("San Marino", "Southern Europe"),
    ("Sao Tome and Principe", "Middle Africa"),
    ("Slovakia", "Eastern Europe"),
    ("Somalia", "Eastern Africa"),
    ("South Africa", "Southern Africa"),
    ("South Sudan", "Eastern Africa"),
    ("Spain", "Southern Europe"),
    ("Sri Lanka", "South Asia"),
    ("Sudan", "Northern Africa"),
    ("Suriname", "South America"),
    ("Switzerland", "Western Europe"),
    ("Taiwan", "Eastern Asia"),
    ("Tanzania", "Eastern Africa"),
    ("Uganda", "Eastern Africa"),
    ("Ukraine", "Eastern Europe"),
    ("United Kingdom", "Northern Europe"),
    ("United States", "North America"),
    ("Uruguay", "South America"),
    ("Venezuela", "South America"),
    ("Zambia", "Eastern Africa"),
    ("Zimbabwe", "Eastern Africa"),
];

/// Exact, case-sensitive lookup. No trimming or normalization is applied.
pub fn canonical_subregion(name: &str) -> Option<&'static str> {
    SUBREGION_UPDATES
        .binary_search_by(|(candidate, _)| (*candidate).cmp(name))
        .ok()
        .map(|index| SUBREGION_UPDATES[index].1)
}
