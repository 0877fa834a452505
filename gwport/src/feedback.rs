use educe::Educe;
use thiserror::Error;

use crate::concepts::binding::GatewayPortBinding;
use crate::framework::PrefixEntity;

/// Errors that cause an operation on the inventory model to be rejected without side effects
#[derive(Error)]
#[derive(Educe)]
#[educe(Debug(bound()))]
pub enum InventoryError<P: PrefixEntity> {
    /// A binding was requested for a prefix that was never registered (or has been removed)
    #[error("No prefix with id {prefix_id} is registered")]
    UnknownPrefix {
        prefix_id: P::PrefixId
    },
    #[error("Gateway port table is full, a device may report at most {limit} bindings")]
    CapacityExceeded {
        limit: usize
    },
    /// Only raised when `TableParams::strict_redundancy` is set
    #[error("Prefix {prefix_id} has more than one active redundancy gateway: {gateways:?}")]
    ConflictingRedundancy {
        prefix_id: P::PrefixId,
        gateways: Vec<String>
    },
    #[cfg(feature = "serde")]
    #[error("Gateway port table snapshot could not be encoded or decoded")]
    Snapshot(#[source] serde_json::Error),
}

/// Although this is an error enum, these should be treated as warnings.
#[derive(Error)]
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()))]
pub enum InventoryWarning<P: PrefixEntity> {
    /// The device reported the same binding more than once, the copies were merged.
    #[error("Duplicate gateway port binding {binding}")]
    DuplicateBinding {
        binding: GatewayPortBinding<P>
    },
    /// HSRP has a single active router per group
    #[error("Prefix {prefix_id} has more than one active redundancy gateway: {gateways:?}")]
    MultipleActiveRedundancy {
        prefix_id: P::PrefixId,
        gateways: Vec<String>
    },
}
