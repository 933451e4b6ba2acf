//! Property tests for the decode/encode laws.

use proptest::prelude::*;
use stt_interpreter::{decode, encode, join_byte, split_byte, BitPair, ServiceInfo, SttError};

fn pair() -> impl Strategy<Value = BitPair> {
    (any::<bool>(), any::<bool>())
        .prop_map(|(allocated, activated)| BitPair::new(allocated, activated))
}

/// Records in whole byte groups, at least a minimal table.
fn aligned_services() -> impl Strategy<Value = Vec<ServiceInfo>> {
    (2usize..32)
        .prop_flat_map(|bytes| prop::collection::vec((pair(), any::<bool>()), bytes * 4))
        .prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (p, mandatory))| {
                    ServiceInfo::new(format!("svc{i}"), p.allocated, p.activated, mandatory)
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn decode_yields_four_per_byte(bytes in prop::collection::vec(any::<u8>(), 2..64)) {
        let services = decode(&bytes).unwrap();
        prop_assert_eq!(services.len(), 4 * bytes.len());
    }

    #[test]
    fn decode_then_encode_is_identity(bytes in prop::collection::vec(any::<u8>(), 2..64)) {
        let services = decode(&bytes).unwrap();
        prop_assert_eq!(encode(&services).unwrap(), bytes);
    }

    #[test]
    fn decode_flags_first_eight_mandatory(bytes in prop::collection::vec(any::<u8>(), 2..64)) {
        let services = decode(&bytes).unwrap();
        for (index, service) in services.iter().enumerate() {
            prop_assert_eq!(service.is_mandatory(), index < 8);
        }
    }

    #[test]
    fn decode_rejects_short_tables(bytes in prop::collection::vec(any::<u8>(), 0..2)) {
        prop_assert!(decode(&bytes).is_err());
    }

    #[test]
    fn encode_then_decode_keeps_pairs(services in aligned_services()) {
        let bytes = encode(&services).unwrap();
        prop_assert_eq!(bytes.len(), services.len() / 4);

        let decoded = decode(&bytes).unwrap();
        let before: Vec<BitPair> = services.iter().map(ServiceInfo::bit_pair).collect();
        let after: Vec<BitPair> = decoded.iter().map(ServiceInfo::bit_pair).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn encode_rejects_short_lists(len in 0usize..8) {
        let services = vec![ServiceInfo::new("s", true, true, false); len];
        prop_assert!(encode(&services).is_err());
    }

    #[test]
    fn encode_rejects_unaligned_lists(groups in 2usize..16, extra in 1usize..4) {
        let len = groups * 4 + extra;
        let services = vec![ServiceInfo::new("s", false, true, false); len];
        prop_assert_eq!(encode(&services), Err(SttError::UnalignedRecordCount(len)));
    }

    #[test]
    fn join_inverts_split(a in pair(), b in pair(), c in pair(), d in pair()) {
        let pairs = [a, b, c, d];
        prop_assert_eq!(split_byte(join_byte(pairs)), pairs);
    }
}
