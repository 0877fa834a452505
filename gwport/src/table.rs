use std::collections::{HashMap, HashSet};

use educe::Educe;
use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::concepts::binding::GatewayPortBinding;
use crate::feedback::{InventoryError, InventoryWarning};
use crate::framework::{PrefixEntity, TableParams};
#[cfg(feature = "serde")]
use crate::registry::PrefixRegistry;
use crate::util::binding_order;

/// The difference between two snapshots of a device's gateway ports
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()), Default(bound()))]
pub struct SnapshotDiff<P: PrefixEntity> {
    /// bindings present in the new snapshot only
    pub added: Vec<GatewayPortBinding<P>>,
    /// bindings present in the old snapshot only
    pub removed: Vec<GatewayPortBinding<P>>,
}

impl<P: PrefixEntity> SnapshotDiff<P> {
    fn between(old: &HashSet<GatewayPortBinding<P>>, new: &HashSet<GatewayPortBinding<P>>) -> Self {
        let mut added: Vec<_> = new.difference(old).cloned().collect();
        let mut removed: Vec<_> = old.difference(new).cloned().collect();
        added.sort_by(|a, b| binding_order(a, b));
        removed.sort_by(|a, b| binding_order(a, b));
        Self { added, removed }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// All gateway port bindings collected from one device
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()), Default(bound()))]
pub struct GatewayPortTable<P: PrefixEntity> {
    bindings: HashSet<GatewayPortBinding<P>>,
    params: TableParams,
    warnings: Vec<InventoryWarning<P>>,
}

/// Frozen form of a table, bindings refer to their prefix by id only
#[cfg(feature = "serde")]
#[derive(Serialize)]
#[serde(bound = "")]
struct FrozenTable<'a, P: PrefixEntity> {
    params: &'a TableParams,
    bindings: Vec<&'a GatewayPortBinding<P>>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ThawedTable<Id> {
    params: TableParams,
    bindings: Vec<ThawedBinding<Id>>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ThawedBinding<Id> {
    gateway_address: String,
    is_redundancy_active: bool,
    prefix_id: Id,
}

impl<P: PrefixEntity> GatewayPortTable<P> {
    pub fn new() -> Self {
        Self::with_params(TableParams::default())
    }

    pub fn with_params(params: TableParams) -> Self {
        Self {
            bindings: HashSet::new(),
            params,
            warnings: Vec::new(),
        }
    }

    pub fn params(&self) -> &TableParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn contains(&self, binding: &GatewayPortBinding<P>) -> bool {
        self.bindings.contains(binding)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GatewayPortBinding<P>> {
        self.bindings.iter()
    }

    /// Adds a single binding, returns false if an equal binding was already present
    pub fn insert(&mut self, binding: GatewayPortBinding<P>) -> Result<bool, InventoryError<P>> {
        if self.bindings.contains(&binding) {
            self.warn_duplicate(binding);
            return Ok(false);
        }
        if self.bindings.len() >= self.params.max_bindings {
            return Err(InventoryError::CapacityExceeded {
                limit: self.params.max_bindings,
            });
        }
        if binding.is_redundancy_active() {
            let mut gateways: Vec<String> = self
                .bindings
                .iter()
                .filter(|b| b.is_redundancy_active() && b.prefix_id() == binding.prefix_id())
                .map(|b| b.gateway_address().to_string())
                .collect();
            if !gateways.is_empty() {
                gateways.push(binding.gateway_address().to_string());
                gateways.sort();
                self.check_redundancy(binding.prefix_id(), gateways)?;
            }
        }
        Ok(self.bindings.insert(binding))
    }

    pub fn remove(&mut self, binding: &GatewayPortBinding<P>) -> bool {
        self.bindings.remove(binding)
    }

    /// All bindings that serve the given prefix, in listing order
    pub fn for_prefix(&self, id: &P::PrefixId) -> Vec<&GatewayPortBinding<P>> {
        let mut bindings: Vec<_> = self.bindings.iter().filter(|b| b.prefix_id() == *id).collect();
        bindings.sort_by(|a, b| binding_order(a, b));
        bindings
    }

    /// The active redundancy gateway of a prefix. If there are several, the first in listing order
    pub fn active_gateway(&self, id: &P::PrefixId) -> Option<&GatewayPortBinding<P>> {
        self.for_prefix(id).into_iter().find(|b| b.is_redundancy_active())
    }

    /// Replaces the table contents with a freshly collected snapshot.
    ///
    /// The snapshot is deduplicated and checked against the table params before anything is
    /// replaced; if it is rejected, the table is left as it was.
    pub fn rebuild(
        &mut self,
        snapshot: impl IntoIterator<Item = GatewayPortBinding<P>>,
    ) -> Result<SnapshotDiff<P>, InventoryError<P>> {
        let mut next = HashSet::new();
        let mut duplicates = Vec::new();
        for binding in snapshot {
            if next.contains(&binding) {
                duplicates.push(binding);
            } else {
                next.insert(binding);
            }
        }
        if next.len() > self.params.max_bindings {
            return Err(InventoryError::CapacityExceeded {
                limit: self.params.max_bindings,
            });
        }

        let mut active: HashMap<P::PrefixId, Vec<String>> = HashMap::new();
        for binding in next.iter().filter(|b| b.is_redundancy_active()) {
            active
                .entry(binding.prefix_id())
                .or_default()
                .push(binding.gateway_address().to_string());
        }
        let mut conflicts: Vec<_> = active.into_iter().filter(|(_, gws)| gws.len() > 1).collect();
        conflicts.sort_by(|a, b| a.0.cmp(&b.0));
        if self.params.strict_redundancy {
            if let Some((prefix_id, mut gateways)) = conflicts.into_iter().next() {
                gateways.sort();
                return Err(InventoryError::ConflictingRedundancy { prefix_id, gateways });
            }
        } else {
            for (prefix_id, mut gateways) in conflicts {
                gateways.sort();
                self.warn_redundancy(prefix_id, gateways);
            }
        }

        for binding in duplicates {
            self.warn_duplicate(binding);
        }
        let diff = SnapshotDiff::between(&self.bindings, &next);
        debug!(
            "Rebuilt gateway port table: {} bindings, {} added, {} removed",
            next.len(),
            diff.added.len(),
            diff.removed.len()
        );
        self.bindings = next;
        Ok(diff)
    }

    /// What changed going from this table to `other`
    pub fn diff(&self, other: &Self) -> SnapshotDiff<P> {
        SnapshotDiff::between(&self.bindings, &other.bindings)
    }

    pub fn drain_warnings(&mut self) -> Vec<InventoryWarning<P>> {
        self.warnings.drain(..).collect()
    }

    /// Serializes the table params and bindings to JSON. Prefixes are written as ids only.
    #[cfg(feature = "serde")]
    pub fn freeze(&self) -> Result<String, InventoryError<P>> {
        let mut bindings: Vec<_> = self.bindings.iter().collect();
        bindings.sort_by(|a, b| binding_order(a, b));
        serde_json::to_string(&FrozenTable {
            params: &self.params,
            bindings,
        })
        .map_err(InventoryError::Snapshot)
    }

    /// Restores a table from [`GatewayPortTable::freeze`] output.
    ///
    /// Prefix ids are resolved against `registry`, so restored bindings share the registry's
    /// handles. The bindings are loaded through [`GatewayPortTable::rebuild`] and are subject to
    /// the same limits as a fresh snapshot; warnings it raises stay queued on the restored table.
    #[cfg(feature = "serde")]
    pub fn restore(state: &str, registry: &PrefixRegistry<P>) -> Result<Self, InventoryError<P>> {
        let thawed: ThawedTable<P::PrefixId> =
            serde_json::from_str(state).map_err(InventoryError::Snapshot)?;
        let bindings = thawed
            .bindings
            .into_iter()
            .map(|b| registry.bind(b.gateway_address, b.is_redundancy_active, &b.prefix_id))
            .collect::<Result<Vec<_>, _>>()?;
        let mut table = Self::with_params(thawed.params);
        table.rebuild(bindings)?;
        Ok(table)
    }

    fn check_redundancy(
        &mut self,
        prefix_id: P::PrefixId,
        gateways: Vec<String>,
    ) -> Result<(), InventoryError<P>> {
        if self.params.strict_redundancy {
            return Err(InventoryError::ConflictingRedundancy { prefix_id, gateways });
        }
        self.warn_redundancy(prefix_id, gateways);
        Ok(())
    }

    fn warn_redundancy(&mut self, prefix_id: P::PrefixId, gateways: Vec<String>) {
        warn!(
            "Prefix {} has {} active redundancy gateways: {}",
            prefix_id,
            gateways.len(),
            json!(gateways)
        );
        self.warnings
            .push(InventoryWarning::MultipleActiveRedundancy { prefix_id, gateways });
    }

    fn warn_duplicate(&mut self, binding: GatewayPortBinding<P>) {
        debug!(
            "Ignoring duplicate binding for gateway {} on prefix {}",
            json!(binding.gateway_address()),
            binding.prefix_id()
        );
        self.warnings.push(InventoryWarning::DuplicateBinding { binding });
    }
}
