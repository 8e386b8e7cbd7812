//! Hedera entity IDs and their EVM address form
//!
//! Tokens and contracts on Hedera are addressed as `shard.realm.num`. The
//! EVM-compatible layer (and therefore the quoter contract) wants the
//! 20-byte "long-zero" address: 4-byte shard, 8-byte realm, 8-byte num,
//! all big-endian.

use alloy_primitives::Address;
use std::fmt;
use std::str::FromStr;

use crate::error::QuoteError;

/// A `shard.realm.num` entity ID, e.g. `0.0.731861`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId {
    pub shard: u32,
    pub realm: u64,
    pub num: u64,
}

impl EntityId {
    /// Pack into the 20-byte long-zero EVM address.
    pub fn to_evm_address(self) -> Address {
        let mut raw = [0u8; 20];
        raw[..4].copy_from_slice(&self.shard.to_be_bytes());
        raw[4..12].copy_from_slice(&self.realm.to_be_bytes());
        raw[12..].copy_from_slice(&self.num.to_be_bytes());
        Address::from(raw)
    }
}

impl FromStr for EntityId {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || QuoteError::InvalidRoute(format!("malformed entity id '{s}'"));

        let mut parts = s.split('.');
        let shard = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let realm = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let num = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        if parts.next().is_some() {
            return Err(bad());
        }

        Ok(Self { shard, realm, num })
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

/// Seam between route descriptions and wire-level addresses, so the
/// encoder and runner can be exercised with a fake resolver in tests.
pub trait ResolveAddress {
    fn resolve(&self, id: &str) -> Result<Address, QuoteError>;
}

/// Production resolver: Hedera entity IDs, plus literal `0x…` addresses
/// for tokens that are only known by their EVM form.
#[derive(Debug, Clone, Copy, Default)]
pub struct HederaResolver;

impl ResolveAddress for HederaResolver {
    fn resolve(&self, id: &str) -> Result<Address, QuoteError> {
        if id.starts_with("0x") {
            return Address::from_str(id)
                .map_err(|_| QuoteError::InvalidRoute(format!("malformed address '{id}'")));
        }
        EntityId::from_str(id).map(EntityId::to_evm_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_parse() {
        let id: EntityId = "0.0.731861".parse().unwrap();
        assert_eq!(id.shard, 0);
        assert_eq!(id.realm, 0);
        assert_eq!(id.num, 731861);
        assert_eq!(id.to_string(), "0.0.731861");
    }

    #[test]
    fn test_entity_id_rejects_garbage() {
        assert!("0.0".parse::<EntityId>().is_err());
        assert!("0.0.x".parse::<EntityId>().is_err());
        assert!("0.0.1.2".parse::<EntityId>().is_err());
        assert!("".parse::<EntityId>().is_err());
    }

    #[test]
    fn test_long_zero_address() {
        // 3949424 = 0x3c4370
        let quoter: EntityId = "0.0.3949424".parse().unwrap();
        assert_eq!(
            format!("{:?}", quoter.to_evm_address()),
            "0x00000000000000000000000000000000003c4370"
        );

        let nonzero = EntityId { shard: 1, realm: 2, num: 3 };
        let raw = nonzero.to_evm_address();
        assert_eq!(&raw[..4], &1u32.to_be_bytes());
        assert_eq!(&raw[4..12], &2u64.to_be_bytes());
        assert_eq!(&raw[12..], &3u64.to_be_bytes());
    }

    #[test]
    fn test_resolver_accepts_both_forms() {
        let resolver = HederaResolver;
        let from_id = resolver.resolve("0.0.456858").unwrap();
        let from_hex = resolver
            .resolve("0x000000000000000000000000000000000006f89a")
            .unwrap();
        assert_eq!(from_id, from_hex);

        assert!(resolver.resolve("0xnothex").is_err());
        assert!(resolver.resolve("not-an-id").is_err());
    }
}
