use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::framework::PrefixEntity;
use crate::util::parse_prefix_len;

/// Identifier of a prefix row in the inventory
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct PrefixId(pub u32);

impl Display for PrefixId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PrefixId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// An IP prefix served by one or more gateway ports
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Prefix {
    pub id: PrefixId,
    /// network address in CIDR notation, kept as collected
    pub net_address: String,
    /// the broadcast domain this prefix lives in, if known
    pub vlan: Option<u16>,
}

impl Prefix {
    pub fn new(id: impl Into<PrefixId>, net_address: impl Into<String>, vlan: Option<u16>) -> Self {
        Self {
            id: id.into(),
            net_address: net_address.into(),
            vlan,
        }
    }

    /// The mask length of the prefix, None if `net_address` carries none
    pub fn prefix_len(&self) -> Option<u8> {
        parse_prefix_len(&self.net_address)
    }
}

impl PrefixEntity for Prefix {
    type PrefixId = PrefixId;

    fn prefix_id(&self) -> PrefixId {
        self.id
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.vlan {
            Some(vlan) => write!(f, "{} (vlan {})", self.net_address, vlan),
            None => write!(f, "{}", self.net_address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_and_without_vlan() {
        assert_eq!(Prefix::new(1, "10.0.0.0/24", Some(20)).to_string(), "10.0.0.0/24 (vlan 20)");
        assert_eq!(Prefix::new(2, "10.0.1.0/24", None).to_string(), "10.0.1.0/24");
    }

    #[test]
    fn prefix_len_from_net_address() {
        assert_eq!(Prefix::new(1, "192.168.0.0/16", None).prefix_len(), Some(16));
        assert_eq!(Prefix::new(1, "192.168.0.0", None).prefix_len(), None);
    }
}
