//! Compact binary form. Each reservoir is written as
//!
//! ```text
//! [u64 LE name length][name bytes]
//! [u64 LE kind length][kind bytes]
//! [f64 LE width][f64 LE length][f64 LE max depth]
//! ```
//!
//! Records are concatenated without separators or headers.

use crate::error::{from_nom, DecodeError, Result};
use crate::reservoir::Reservoir;
use nom::bytes::complete::take;
use nom::number::complete::{le_f64, le_u64};
use nom::IResult;
use std::convert::TryFrom;
use tracing::debug;

/// Width of the length prefix in front of each text field.
pub const LEN_PREFIX_WIDTH: usize = 8;
const F64_WIDTH: usize = 8;

pub fn encode(r: &Reservoir) -> Vec<u8> {
    let mut out = Vec::with_capacity(
        2 * LEN_PREFIX_WIDTH + r.name().len() + r.kind().len() + 3 * F64_WIDTH,
    );
    for text in &[r.name(), r.kind()] {
        out.extend_from_slice(&(text.len() as u64).to_le_bytes());
        out.extend_from_slice(text.as_bytes());
    }
    out.extend_from_slice(&r.width().to_le_bytes());
    out.extend_from_slice(&r.length().to_le_bytes());
    out.extend_from_slice(&r.max_depth().to_le_bytes());
    out
}

fn truncated(field: &'static str, needed: usize, available: usize) -> nom::Err<DecodeError> {
    nom::Err::Failure(DecodeError::Truncated {
        field,
        needed,
        available,
    })
}

/// Length-prefixed UTF-8 text.
fn text_field(field: &'static str) -> impl Fn(&[u8]) -> IResult<&[u8], String, DecodeError> {
    move |s| {
        let (s, len) = le_u64::<_, nom::error::Error<&[u8]>>(s)
            .map_err(|_| truncated(field, LEN_PREFIX_WIDTH, s.len()))?;
        let len = usize::try_from(len)
            .map_err(|_| nom::Err::Failure(DecodeError::LengthOverflow { field, len }))?;
        let (s, bytes) = take::<_, _, nom::error::Error<&[u8]>>(len)(s)
            .map_err(|_| truncated(field, len, s.len()))?;
        let text = std::str::from_utf8(bytes)
            .map_err(|_| nom::Err::Failure(DecodeError::InvalidUtf8 { field }))?;
        Ok((s, text.to_owned()))
    }
}

fn float_field(field: &'static str) -> impl Fn(&[u8]) -> IResult<&[u8], f64, DecodeError> {
    move |s| {
        le_f64::<_, nom::error::Error<&[u8]>>(s).map_err(|_| truncated(field, F64_WIDTH, s.len()))
    }
}

fn record(s: &[u8]) -> IResult<&[u8], Reservoir, DecodeError> {
    let (s, name) = text_field("name")(s)?;
    let (s, kind) = text_field("kind")(s)?;
    let (s, width) = float_field("width")(s)?;
    let (s, length) = float_field("length")(s)?;
    let (s, max_depth) = float_field("max_depth")(s)?;
    Ok((s, Reservoir::new(name, kind, width, length, max_depth)))
}

/// Decodes a single record from the front of `bytes`, returning it along
/// with the number of bytes consumed.
pub fn decode_record(bytes: &[u8]) -> Result<(Reservoir, usize)> {
    let (rest, r) = record(bytes).map_err(from_nom)?;
    Ok((r, bytes.len() - rest.len()))
}

/// Decodes records back-to-back until the input is exhausted.
pub fn decode(bytes: &[u8]) -> Result<Vec<Reservoir>> {
    let mut input = bytes;
    let mut records = vec![];
    while !input.is_empty() {
        let (r, consumed) = decode_record(input)?;
        debug!(name = r.name(), consumed, "decoded binary record");
        records.push(r);
        input = &input[consumed..];
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use proptest::prelude::*;

    #[test]
    fn test_encode_layout() {
        let r = Reservoir::new("ab", "Sea", 1.5, 2.0, -3.0);
        let bytes = encode(&r);
        assert_eq!(bytes.len(), 8 + 2 + 8 + 3 + 24);
        assert_eq!(&bytes[0..8], &2u64.to_le_bytes());
        assert_eq!(&bytes[8..10], b"ab");
        assert_eq!(&bytes[10..18], &3u64.to_le_bytes());
        assert_eq!(&bytes[18..21], b"Sea");
        assert_eq!(&bytes[21..29], &1.5f64.to_le_bytes());
        assert_eq!(&bytes[29..37], &2.0f64.to_le_bytes());
        assert_eq!(&bytes[37..45], &(-3.0f64).to_le_bytes());
    }

    #[test]
    fn test_multibyte_name_length_is_in_bytes() {
        let r = Reservoir::new("Дніпро", "Річка", 0.0, 0.0, 0.0);
        let bytes = encode(&r);
        assert_eq!(&bytes[0..8], &12u64.to_le_bytes());
        assert_eq!(decode(&bytes).unwrap(), vec![r]);
    }

    #[test]
    fn test_decode_record_reports_consumed() {
        let a = Reservoir::new("a", "Lake", 1.0, 2.0, 3.0);
        let mut bytes = encode(&a);
        let first_len = bytes.len();
        bytes.extend(encode(&Reservoir::default()));
        let (decoded, consumed) = decode_record(&bytes).unwrap();
        assert_eq!(decoded, a);
        assert_eq!(consumed, first_len);
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_truncated_length_prefix() {
        match decode(&[1, 0, 0]) {
            Err(Error::Decode(DecodeError::Truncated {
                field,
                needed,
                available,
            })) => {
                assert_eq!(field, "name");
                assert_eq!(needed, 8);
                assert_eq!(available, 3);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_declared_length_past_end() {
        let mut bytes = 100u64.to_le_bytes().to_vec();
        bytes.extend_from_slice(b"short");
        match decode(&bytes) {
            Err(Error::Decode(DecodeError::Truncated {
                field,
                needed,
                available,
            })) => {
                assert_eq!(field, "name");
                assert_eq!(needed, 100);
                assert_eq!(available, 5);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_truncated_trailing_double() {
        let bytes = encode(&Reservoir::new("a", "b", 1.0, 2.0, 3.0));
        match decode(&bytes[..bytes.len() - 1]) {
            Err(Error::Decode(DecodeError::Truncated { field, .. })) => {
                assert_eq!(field, "max_depth")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8() {
        let mut bytes = 2u64.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        match decode(&bytes) {
            Err(Error::Decode(DecodeError::InvalidUtf8 { field })) => assert_eq!(field, "name"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_round_trip_is_bit_exact(
            name in ".{0,16}",
            kind in ".{0,8}",
            w in any::<f64>(),
            l in any::<f64>(),
            d in any::<f64>(),
        ) {
            let r = Reservoir::new(name.clone(), kind.clone(), w, l, d);
            let decoded = decode(&encode(&r)).unwrap();
            prop_assert_eq!(decoded.len(), 1);
            prop_assert_eq!(decoded[0].name(), name.as_str());
            prop_assert_eq!(decoded[0].kind(), kind.as_str());
            prop_assert_eq!(decoded[0].width().to_bits(), w.to_bits());
            prop_assert_eq!(decoded[0].length().to_bits(), l.to_bits());
            prop_assert_eq!(decoded[0].max_depth().to_bits(), d.to_bits());
        }
    }
}
