//! Mode binding.
//!
//! Binding a query mode builds the collector appropriate to it: free text
//! for name lookups, a pick list populated from the catalog vocabulary for
//! facet lookups. The binding owns the collector for the mode's lifetime.

use tipple_catalog::Catalog;
use tipple_core::QueryMode;

use crate::collector::{Collector, FreeTextCollector, PickListCollector};

/// An active query mode and the collector built for it.
#[derive(Debug)]
pub struct ModeBinding {
    mode: QueryMode,
    collector: Collector,
}

impl ModeBinding {
    /// The bound mode.
    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    /// The collector gathering this mode's criteria.
    pub fn collector(&self) -> &Collector {
        &self.collector
    }

    /// Mutable access to the collector.
    pub fn collector_mut(&mut self) -> &mut Collector {
        &mut self.collector
    }
}

/// Build the collector for a mode and bind the two together.
///
/// Facet modes fetch their vocabulary from the catalog here. When the
/// catalog is unreachable the vocabulary comes back empty and the pick
/// list is still usable, just with nothing to offer.
pub async fn bind(catalog: &dyn Catalog, mode: QueryMode) -> ModeBinding {
    let collector = match mode.facet() {
        None => Collector::FreeText(FreeTextCollector::new()),
        Some(facet) => {
            let options = catalog.vocabulary(facet).await;
            tracing::debug!(
                "Bound {:?} mode with {} vocabulary entries",
                mode,
                options.len()
            );
            Collector::PickList(PickListCollector::new(options))
        }
    };

    ModeBinding { mode, collector }
}
