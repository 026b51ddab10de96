use proptest::prelude::*;

use congress_types::{Address, TokenAmount};

proptest! {
    /// Parsing the display form yields the same address.
    #[test]
    fn address_display_parses_back(bytes in prop::array::uniform20(0u8..)) {
        let addr = Address::new(bytes);
        let parsed: Address = addr.to_string().parse().unwrap();
        prop_assert_eq!(parsed, addr);
    }

    /// Address ordering is the lexicographic byte ordering.
    #[test]
    fn address_ordering_follows_bytes(
        a in prop::array::uniform20(0u8..),
        b in prop::array::uniform20(0u8..),
    ) {
        prop_assert_eq!(Address::new(a).cmp(&Address::new(b)), a.cmp(&b));
    }

    /// Address::is_zero is true only for all-zero bytes.
    #[test]
    fn address_is_zero_correct(bytes in prop::array::uniform20(0u8..)) {
        prop_assert_eq!(Address::new(bytes).is_zero(), bytes == [0u8; 20]);
    }

    /// Any string without the 0x prefix is rejected.
    #[test]
    fn address_requires_prefix(s in "[0-9a-f]{40}") {
        prop_assert!(s.parse::<Address>().is_err());
    }

    /// TokenAmount: checked_add(a, b) == Some(a + b) when no overflow.
    #[test]
    fn token_amount_checked_add(a in 0u128..u128::MAX / 2, b in 0u128..u128::MAX / 2) {
        let sum = TokenAmount::new(a).checked_add(TokenAmount::new(b));
        prop_assert_eq!(sum, Some(TokenAmount::new(a + b)));
    }

    /// TokenAmount: checked_sub returns None when b > a.
    #[test]
    fn token_amount_checked_sub_underflow(a in 0u128..1_000_000, b in 0u128..1_000_000) {
        let result = TokenAmount::new(a).checked_sub(TokenAmount::new(b));
        if b > a {
            prop_assert!(result.is_none());
        } else {
            prop_assert_eq!(result, Some(TokenAmount::new(a - b)));
        }
    }
}
