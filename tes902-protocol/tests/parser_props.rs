//! Host-side property tests for the checksum engine and frame parser.

use proptest::prelude::*;

use tes902_protocol::{crc16, Frame, FrameParser, MAX_PAYLOAD_SIZE, RESP_MEASUREMENT, SYNC1};

proptest! {
    #[test]
    fn crc_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(crc16(&data), crc16(&data));
    }

    #[test]
    fn encoded_frames_are_accepted(
        resp_type in any::<u8>(),
        payload in proptest::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD_SIZE),
    ) {
        let frame = Frame::new(resp_type, &payload).unwrap();
        let encoded = frame.encode_to_vec().unwrap();

        let mut parser = FrameParser::new();
        let parsed = parser.feed_bytes(&encoded).unwrap().unwrap();
        prop_assert_eq!(parsed, frame);
    }

    #[test]
    fn garbage_prefix_does_not_affect_extraction(
        prefix in proptest::collection::vec(
            any::<u8>().prop_filter("must not open a frame", |b| *b != SYNC1),
            0..32,
        ),
        payload in proptest::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD_SIZE),
    ) {
        let frame = Frame::new(RESP_MEASUREMENT, &payload).unwrap();
        let encoded = frame.encode_to_vec().unwrap();

        let mut parser = FrameParser::new();
        for &byte in &prefix {
            prop_assert_eq!(parser.feed(byte), Ok(None));
        }
        let parsed = parser.feed_bytes(&encoded).unwrap().unwrap();
        prop_assert_eq!(parsed, frame);
    }

    #[test]
    fn truncated_frames_never_complete(
        payload in proptest::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD_SIZE),
    ) {
        let frame = Frame::new(RESP_MEASUREMENT, &payload).unwrap();
        let encoded = frame.encode_to_vec().unwrap();

        for cut in 0..encoded.len() {
            let mut parser = FrameParser::new();
            prop_assert_eq!(parser.feed_bytes(&encoded[..cut]), Ok(None));
        }
    }

    #[test]
    fn single_bit_flip_is_rejected(
        payload in proptest::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD_SIZE),
        pick in any::<u16>(),
        bit in 0u8..8,
    ) {
        let frame = Frame::new(RESP_MEASUREMENT, &payload).unwrap();
        let mut encoded = frame.encode_to_vec().unwrap();

        // Flip a bit in TYPE or a payload byte. LENGTH is left intact so
        // the corrupted stream keeps its framing; LENGTH corruption is
        // covered by the exhaustive unit test on the concrete frame.
        let candidates = 1 + payload.len();
        let idx = pick as usize % candidates;
        let offset = if idx == 0 { 2 } else { 3 + idx };
        encoded[offset] ^= 1 << bit;

        let mut parser = FrameParser::new();
        let mut accepted = false;
        for &byte in &encoded {
            if let Ok(Some(_)) = parser.feed(byte) {
                accepted = true;
            }
        }
        prop_assert!(!accepted);
    }
}
