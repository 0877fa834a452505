use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use educe::Educe;
#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::concepts::prefix::Prefix;
use crate::framework::PrefixEntity;

/// Associates a gateway port address with the prefix it serves.
///
/// A binding is immutable once built. It holds a shared handle to its prefix and never mutates
/// it; the prefix is owned by whoever created the `Arc` (usually a
/// [`PrefixRegistry`](crate::registry::PrefixRegistry)).
///
/// Two bindings are equal when their gateway addresses are textually identical, their
/// redundancy flags match, and their prefixes have the same [`PrefixEntity::prefix_id`]. The
/// prefixes themselves are never compared. `Hash` covers exactly those three values.
///
/// Serializing a binding writes the prefix id, never the prefix. There is no `Deserialize`, a
/// binding can only be rebuilt against the owner of its prefix (see
/// [`GatewayPortTable::restore`](crate::table::GatewayPortTable::restore)).
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()))]
pub struct GatewayPortBinding<P: PrefixEntity = Prefix> {
    /// the gateway ip, as collected from the device. Not parsed or normalized
    gateway_address: String,
    /// whether this gateway is the active member of its first-hop redundancy (HSRP) group
    is_redundancy_active: bool,
    prefix: Arc<P>,
}

impl<P: PrefixEntity> GatewayPortBinding<P> {
    pub fn new(gateway_address: impl Into<String>, is_redundancy_active: bool, prefix: Arc<P>) -> Self {
        Self {
            gateway_address: gateway_address.into(),
            is_redundancy_active,
            prefix,
        }
    }

    pub fn gateway_address(&self) -> &str {
        &self.gateway_address
    }

    pub fn is_redundancy_active(&self) -> bool {
        self.is_redundancy_active
    }

    pub fn prefix(&self) -> &Arc<P> {
        &self.prefix
    }

    pub fn prefix_id(&self) -> P::PrefixId {
        self.prefix.prefix_id()
    }
}

impl<P: PrefixEntity> PartialEq for GatewayPortBinding<P> {
    fn eq(&self, other: &Self) -> bool {
        self.gateway_address == other.gateway_address
            && self.is_redundancy_active == other.is_redundancy_active
            && self.prefix.prefix_id() == other.prefix.prefix_id()
    }
}

impl<P: PrefixEntity> Eq for GatewayPortBinding<P> {}

impl<P: PrefixEntity> Hash for GatewayPortBinding<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.gateway_address.hash(state);
        self.is_redundancy_active.hash(state);
        self.prefix.prefix_id().hash(state);
    }
}

#[cfg(feature = "serde")]
impl<P: PrefixEntity> Serialize for GatewayPortBinding<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GatewayPortBinding", 3)?;
        state.serialize_field("gateway_address", &self.gateway_address)?;
        state.serialize_field("is_redundancy_active", &self.is_redundancy_active)?;
        state.serialize_field("prefix_id", &self.prefix.prefix_id())?;
        state.end()
    }
}

impl<P: PrefixEntity> Display for GatewayPortBinding<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} via prefix {}", self.gateway_address, self.prefix.prefix_id())?;
        if self.is_redundancy_active {
            write!(f, " [active]")?;
        }
        Ok(())
    }
}
