use crate::core::DeserializationError;
use crate::serialization::cookie::*;
use crate::serialization::{ArrayPayload, Compression, PayloadValues, SerializableAccumulator};
use crate::st::{EffHistogram, Histogram, Histogram2D, JointHistogram};
use crate::tests::util::*;

#[test]
fn histogram_payload_round_trip_compressed() {
    init_logging();
    let mut h = Histogram::new("pt", (0.0, 10.0), 21, true).unwrap();
    h.fill(&samples(41, 3000, 0.0, 10.0));

    let buf = h.serialize().unwrap();
    assert_eq!(&buf[..4], &get_compressed_encoding_cookie().to_be_bytes());

    let payload = ArrayPayload::deserialize(&buf).unwrap();
    assert_eq!(payload, h.payload());
    assert_eq!(payload.name, "pt");
    assert_eq!(payload.compression, Compression::default());
    match payload.values {
        PayloadValues::Counts(ref counts) => assert_eq!(counts.as_slice(), h.values()),
        ref other => panic!("unexpected payload values {:?}", other),
    }
}

#[test]
fn joint_payload_round_trip_uncompressed() {
    let mut h = JointHistogram::new("ab", (0.0, 4.0), 5, false).unwrap();
    succ!(h.fill(&[&[0.5, 1.5], &[3.5]]));

    let buf = h.serialize().unwrap();
    assert_eq!(&buf[..4], &get_encoding_cookie().to_be_bytes());

    let payload = ArrayPayload::deserialize(&buf).unwrap();
    assert_eq!(payload.compression, Compression::None);
    assert_eq!(payload.values.shape(), (2, 4));
    assert_eq!(payload, h.payload());
}

#[test]
fn matrix_payload_keeps_float_counts() {
    let mut h = Histogram2D::new("xy", (0.0, 1.0), 6, true).unwrap();
    succ!(h.fill(&samples(51, 500, 0.0, 1.0), &samples(52, 500, 0.0, 1.0)));

    let payload = ArrayPayload::deserialize(&h.serialize().unwrap()).unwrap();
    assert_eq!(payload.edges, h.edges().as_slice());
    assert_eq!(payload.values, PayloadValues::Floats(h.values().clone()));
}

#[test]
fn efficiency_payload_stacks_uncertainty_row() {
    let mut h = EffHistogram::new("trigger", (0.0, 10.0), 6, false).unwrap();
    h.fill(&[1.0], &[1.0, 1.0]);
    let view = h.values();

    let payload = ArrayPayload::deserialize(&h.serialize().unwrap()).unwrap();
    let floats = match payload.values {
        PayloadValues::Floats(floats) => floats,
        other => panic!("unexpected payload values {:?}", other),
    };
    assert_eq!(floats.shape(), (2, 5));

    // empty bins are NaN, so compare bit patterns
    let bits = |row: &[f64]| row.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(floats.row(0).unwrap()), bits(&view.efficiency[..]));
    assert_eq!(bits(floats.row(1).unwrap()), bits(&view.uncertainty.unwrap()[..]));
}

#[test]
fn unknown_cookie_is_rejected() {
    let h = Histogram::new("pt", (0.0, 1.0), 3, false).unwrap();
    let mut buf = h.serialize().unwrap().to_vec();
    buf[0] ^= 0xff;
    match ArrayPayload::deserialize(&buf) {
        Err(DeserializationError::CookieNotRecognized(_)) => {}
        other => panic!("expected CookieNotRecognized, got {:?}", other),
    }
}

#[test]
fn truncated_input_is_rejected() {
    let mut h = Histogram::new("pt", (0.0, 1.0), 3, false).unwrap();
    h.fill(&[0.25, 0.75]);
    let buf = h.serialize().unwrap();

    assert_eq!(ArrayPayload::deserialize(&buf[..2]), Err(DeserializationError::Truncated));
    assert!(ArrayPayload::deserialize(&buf[..buf.len() - 3]).is_err());

    let compressed = Histogram::new("pt", (0.0, 1.0), 3, true).unwrap().serialize().unwrap();
    assert!(ArrayPayload::deserialize(&compressed[..compressed.len() - 1]).is_err());
}
