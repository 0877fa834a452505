use std::collections::HashMap;
use std::sync::Arc;

use educe::Educe;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::binding::GatewayPortBinding;
use crate::feedback::InventoryError;
use crate::framework::PrefixEntity;

/// Owns the prefix handles that bindings point at.
///
/// Removing a prefix from the registry does not invalidate bindings made from it, they keep their
/// own handle until they are dropped.
///
/// Serializes as the list of registered prefixes, ordered by id.
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()), Default(bound()))]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound = "", from = "Vec<P>", into = "Vec<P>")
)]
pub struct PrefixRegistry<P: PrefixEntity> {
    prefixes: HashMap<P::PrefixId, Arc<P>>,
}

impl<P: PrefixEntity> PrefixRegistry<P> {
    pub fn new() -> Self {
        Self {
            prefixes: HashMap::new(),
        }
    }

    /// registers the prefix under its id, replacing (but not invalidating) any earlier prefix
    /// with the same id
    pub fn insert(&mut self, prefix: P) -> Arc<P> {
        let id = prefix.prefix_id();
        let handle = Arc::new(prefix);
        if self.prefixes.insert(id.clone(), handle.clone()).is_some() {
            debug!("Replaced registered prefix {id}");
        }
        handle
    }

    pub fn get(&self, id: &P::PrefixId) -> Option<&Arc<P>> {
        self.prefixes.get(id)
    }

    pub fn remove(&mut self, id: &P::PrefixId) -> Option<Arc<P>> {
        self.prefixes.remove(id)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Creates a binding to a registered prefix
    pub fn bind(
        &self,
        gateway_address: impl Into<String>,
        is_redundancy_active: bool,
        id: &P::PrefixId,
    ) -> Result<GatewayPortBinding<P>, InventoryError<P>> {
        let prefix = self
            .prefixes
            .get(id)
            .ok_or_else(|| InventoryError::UnknownPrefix { prefix_id: id.clone() })?;
        Ok(GatewayPortBinding::new(gateway_address, is_redundancy_active, prefix.clone()))
    }
}

impl<P: PrefixEntity> From<Vec<P>> for PrefixRegistry<P> {
    fn from(prefixes: Vec<P>) -> Self {
        let mut registry = Self::new();
        for prefix in prefixes {
            registry.insert(prefix);
        }
        registry
    }
}

impl<P: PrefixEntity> From<PrefixRegistry<P>> for Vec<P> {
    fn from(registry: PrefixRegistry<P>) -> Self {
        let mut prefixes: Vec<P> = registry.prefixes.into_values().map(Arc::unwrap_or_clone).collect();
        prefixes.sort_by_key(|p| p.prefix_id());
        prefixes
    }
}
