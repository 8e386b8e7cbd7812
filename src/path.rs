//! Packed path encoding for the quoter contract
//!
//! The quoter consumes Uniswap V3-style packed paths: 20-byte hop address,
//! 3-byte big-endian fee tier, 20-byte address, ... with no fee after the
//! final hop.

use alloy_primitives::Bytes;

use crate::error::QuoteError;
use crate::resolve::ResolveAddress;
use crate::route::Route;

/// Encode a route into the packed byte path.
///
/// Deterministic and side-effect free. Output length is always
/// `hops * 20 + fees * 3` bytes. The path is assembled as a hex string and
/// parsed back through byte-pair decoding; a malformed intermediate string
/// surfaces as `Encoding` rather than a panic.
pub fn encode_path(route: &Route, resolver: &impl ResolveAddress) -> Result<Bytes, QuoteError> {
    let mut path_hex = String::with_capacity(route.tokens().len() * 40 + route.fees().len() * 6);

    for (i, token) in route.tokens().iter().enumerate() {
        let address = resolver.resolve(token)?;
        path_hex.push_str(&hex::encode(address));

        if let Some(fee) = route.fees().get(i) {
            // uint24: drop the high byte of the u32
            let fee_bytes = fee.to_be_bytes();
            path_hex.push_str(&hex::encode(&fee_bytes[1..]));
        }
    }

    let raw = hex::decode(&path_hex)
        .map_err(|e| QuoteError::Encoding(format!("bad intermediate hex '{path_hex}': {e}")))?;
    Ok(Bytes::from(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::HederaResolver;
    use alloy_primitives::Address;
    use std::str::FromStr;

    fn route(tokens: &[&str], fees: &[u32]) -> Route {
        Route::new(
            tokens.iter().map(|t| t.to_string()).collect(),
            fees.to_vec(),
        )
        .unwrap()
    }

    /// Resolver that maps single-letter ids to recognizable addresses.
    struct LetterResolver;

    impl ResolveAddress for LetterResolver {
        fn resolve(&self, id: &str) -> Result<Address, QuoteError> {
            let byte = id
                .bytes()
                .next()
                .ok_or_else(|| QuoteError::InvalidRoute("empty id".into()))?;
            Ok(Address::from([byte; 20]))
        }
    }

    #[test]
    fn test_two_hop_layout() {
        let path = encode_path(&route(&["A", "B"], &[3000]), &LetterResolver).unwrap();

        let mut expected = vec![b'A'; 20];
        expected.extend_from_slice(&[0x00, 0x0b, 0xb8]); // 3000 = 0x000bb8
        expected.extend_from_slice(&[b'B'; 20]);
        assert_eq!(path.to_vec(), expected);
    }

    #[test]
    fn test_path_length() {
        for hops in 2..=5 {
            let tokens: Vec<&str> = ["A", "B", "C", "D", "E"][..hops].to_vec();
            let fees = vec![500u32; hops - 1];
            let path = encode_path(&route(&tokens, &fees), &LetterResolver).unwrap();
            assert_eq!(path.len(), hops * 20 + (hops - 1) * 3);
        }
    }

    #[test]
    fn test_deterministic() {
        let r = route(&["0.0.731861", "0.0.1456986", "0.0.456858"], &[3000, 1500]);
        let first = encode_path(&r, &HederaResolver).unwrap();
        let second = encode_path(&r, &HederaResolver).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fee_round_trips_at_offset() {
        for fee in [0u32, 1, 500, 3000, 10_000, (1 << 24) - 1] {
            let path = encode_path(&route(&["A", "B"], &[fee]), &LetterResolver).unwrap();
            let chunk = &path[20..23];
            let decoded = u32::from_be_bytes([0, chunk[0], chunk[1], chunk[2]]);
            assert_eq!(decoded, fee);
        }
    }

    #[test]
    fn test_hedera_route_resolves_to_long_zero_addresses() {
        let path = encode_path(&route(&["0.0.731861", "0.0.456858"], &[3000]), &HederaResolver)
            .unwrap();

        // 731861 = 0xb2ad5, 456858 = 0x6f89a
        let token_a = Address::from_str("0x00000000000000000000000000000000000b2ad5").unwrap();
        let token_b = Address::from_str("0x000000000000000000000000000000000006f89a").unwrap();
        assert_eq!(&path[..20], token_a.as_slice());
        assert_eq!(&path[20..23], &[0x00, 0x0b, 0xb8]);
        assert_eq!(&path[23..], token_b.as_slice());
    }

    #[test]
    fn test_unresolvable_hop_propagates() {
        let err = encode_path(&route(&["nope", "0.0.1"], &[3000]), &HederaResolver).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidRoute(_)));
    }
}
