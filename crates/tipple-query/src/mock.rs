//! Mock catalog for tests.

use futures::future::BoxFuture;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tipple_catalog::Catalog;
use tipple_core::{Facet, RecipeRecord, ResultSet};

/// Minimal record for tests that only care about identity.
pub fn recipe(name: &str) -> RecipeRecord {
    RecipeRecord {
        name: name.to_string(),
        ingredients: Vec::new(),
        garnish: Vec::new(),
        drinkware: Vec::new(),
        served: Vec::new(),
        instructions: String::new(),
        notes: String::new(),
    }
}

/// Catalog with canned responses and a lookup log.
///
/// Anything not canned resolves the way a failed round trip would: absent
/// or empty.
pub struct MockCatalog {
    recipes: Arc<Mutex<HashMap<String, RecipeRecord>>>,
    facet_results: Arc<Mutex<HashMap<(Facet, String), ResultSet>>>,
    vocabularies: Arc<Mutex<HashMap<Facet, Vec<String>>>>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            recipes: Arc::new(Mutex::new(HashMap::new())),
            facet_results: Arc::new(Mutex::new(HashMap::new())),
            vocabularies: Arc::new(Mutex::new(HashMap::new())),
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Can a recipe for name lookups.
    pub fn with_recipe(self, record: RecipeRecord) -> Self {
        self.recipes.lock().insert(record.name.clone(), record);
        self
    }

    /// Can the result set for one facet value.
    pub fn with_facet_results(self, facet: Facet, value: &str, results: ResultSet) -> Self {
        self.facet_results
            .lock()
            .insert((facet, value.to_string()), results);
        self
    }

    /// Can a facet vocabulary.
    pub fn with_vocabulary(self, facet: Facet, values: Vec<String>) -> Self {
        self.vocabularies.lock().insert(facet, values);
        self
    }

    /// Every lookup issued so far, in call order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().clone()
    }
}

impl Catalog for MockCatalog {
    fn recipe_by_name(&self, name: String) -> BoxFuture<'static, Option<RecipeRecord>> {
        self.lookups.lock().push(format!("cocktail/{}", name));
        let record = self.recipes.lock().get(&name).cloned();
        Box::pin(async move { record })
    }

    fn lookup_facet(&self, facet: Facet, value: String) -> BoxFuture<'static, ResultSet> {
        self.lookups
            .lock()
            .push(format!("{}/{}", facet.path_segment(), value));
        let results = self
            .facet_results
            .lock()
            .get(&(facet, value))
            .cloned()
            .unwrap_or_default();
        Box::pin(async move { results })
    }

    fn vocabulary(&self, facet: Facet) -> BoxFuture<'static, Vec<String>> {
        let values = self
            .vocabularies
            .lock()
            .get(&facet)
            .cloned()
            .unwrap_or_default();
        Box::pin(async move { values })
    }
}
