//! Lookup path construction for the catalog wire contract.
//!
//! All paths are relative to the configured base URL (`/api/v1` on the
//! reference deployment). Values are passed through verbatim; the catalog
//! does not expect percent-encoding.

use tipple_core::Facet;

/// Path resolving one recipe by name: `/cocktail/{name}`.
pub fn recipe_path(name: &str) -> String {
    format!("/cocktail/{}", name)
}

/// Path listing a facet's known values: `/ingredients`, `/garnish`, ...
pub fn facet_index_path(facet: Facet) -> String {
    format!("/{}", facet.path_segment())
}

/// Path resolving one facet value to recipes: `/{facet}/{value}`.
pub fn facet_lookup_path(facet: Facet, value: &str) -> String {
    format!("/{}/{}", facet.path_segment(), value)
}

/// "+"-joined all-of lookup: `/{facet}/{a}+{b}+...`.
///
/// The catalog reserves this form for matching recipes containing every
/// listed value at once. The executor does not issue it yet; each criterion
/// is resolved independently.
// TODO: wire this up once the executor grows an "all of" intersection mode.
pub fn combined_lookup_path(facet: Facet, values: &[String]) -> String {
    format!("/{}/{}", facet.path_segment(), values.join("+"))
}
