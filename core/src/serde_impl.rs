//! `serde` support, behind the `serde` feature.
//!
//! A sequence serializes as a plain sequence of its stored elements, so a
//! `Sequence<T>` and a `Vec<T>` share a wire form. Only value sequences can be
//! deserialized; handle sequences would have nothing to point at.

use alloc::vec::Vec;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::kind::{ByValue, ElementKind};
use crate::sequence::Sequence;

impl<T: Serialize, K: ElementKind<T>> Serialize for Sequence<T, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sequence<T, ByValue> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Sequence::from)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec, vec::Vec};

    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use crate::{RefSequence, Sequence};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Trade {
        symbol: String,
        quantity: u32,
    }

    #[test]
    fn test_value_sequence_round_trips_through_postcard() {
        let trades = Sequence::<Trade>::from([
            Trade { symbol: "ABC".into(), quantity: 10 },
            Trade { symbol: "XYZ".into(), quantity: 25 },
        ]);

        let bytes = postcard::to_allocvec(&trades).unwrap();
        let decoded: Sequence<Trade> = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, trades);
    }

    #[test]
    fn test_sequence_shares_wire_form_with_vec() {
        let numbers = Sequence::<u32>::from([5, 3, 8, 1]);
        let as_vec: Vec<u32> = vec![5, 3, 8, 1];
        assert_eq!(
            postcard::to_allocvec(&numbers).unwrap(),
            postcard::to_allocvec(&as_vec).unwrap()
        );
    }

    #[test]
    fn test_handle_sequence_serializes_targets() {
        let (a, b) = (4u32, 6u32);
        let handles: RefSequence<Option<&u32>> = Sequence::from([Some(&a), None, Some(&b)]);
        let bytes = postcard::to_allocvec(&handles).unwrap();
        let decoded: Vec<Option<u32>> = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, vec![Some(4), None, Some(6)]);
    }
}
