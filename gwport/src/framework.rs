use std::fmt::{Debug, Display};
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::de::DeserializeOwned;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A network prefix as seen by a gateway port binding.
///
/// Bindings only ever look at [`PrefixEntity::prefix_id`], everything else about the prefix is
/// owned and managed by whoever hands out the `Arc<Self>`.
pub trait PrefixEntity: InventoryData + Debug {
    /// Stable identifier of the prefix, MUST be unique among the prefixes of one inventory
    type PrefixId: InventoryKey + InventoryData + Ord + Debug + Display;
    fn prefix_id(&self) -> Self::PrefixId;
}

#[cfg(feature = "serde")]
pub trait InventoryData: Clone + Serialize + DeserializeOwned + Sized {}
#[cfg(feature = "serde")]
impl<T: Clone + Serialize + DeserializeOwned + Sized> InventoryData for T {}

#[cfg(not(feature = "serde"))]
pub trait InventoryData: Clone + Sized {}
#[cfg(not(feature = "serde"))]
impl<T: Clone + Sized> InventoryData for T {}

pub trait InventoryKey: Eq + PartialEq + Hash {}
impl<T: Eq + PartialEq + Hash> InventoryKey for T {}

/// Limits applied to a device's gateway port table
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct TableParams {
    /// upper bound on the number of distinct bindings a single device may report
    pub max_bindings: usize,
    /// reject snapshots where more than one binding is the active redundancy member for a prefix,
    /// instead of only warning about it
    pub strict_redundancy: bool,
}
impl Default for TableParams {
    fn default() -> Self {
        Self {
            max_bindings: 1 << 16,
            strict_redundancy: false,
        }
    }
}
