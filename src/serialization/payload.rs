use crate::accumulator::{ReadableAccumulator, Values};
use crate::core::{Counter, DeserializationError, SerializationError};
use crate::serialization::compression::{self, Compression};
use crate::serialization::cookie::*;
use crate::st::CountsBuffer;
use byteorder::{BigEndian, ByteOrder};
use bytes::{BufMut, BytesMut};

const WORD: usize = 8;

/// Values as handed to the persistence layer.
#[derive(Clone, Debug, PartialEq)]
pub enum PayloadValues {
    Counts(CountsBuffer<u64>),
    Floats(CountsBuffer<f64>),
}

impl PayloadValues {
    pub fn shape(&self) -> (usize, usize) {
        match *self {
            PayloadValues::Counts(ref c) => c.shape(),
            PayloadValues::Floats(ref c) => c.shape(),
        }
    }

    fn kind(&self) -> u8 {
        match *self {
            PayloadValues::Counts(_) => u64::value_kind(),
            PayloadValues::Floats(_) => f64::value_kind(),
        }
    }

    fn words(&self) -> Vec<u64> {
        match *self {
            PayloadValues::Counts(ref c) => c.as_slice().iter().map(Counter::to_word).collect(),
            PayloadValues::Floats(ref c) => c.as_slice().iter().map(Counter::to_word).collect(),
        }
    }
}

impl<'a> From<Values<'a>> for PayloadValues {
    fn from(values: Values<'a>) -> PayloadValues {
        match values {
            Values::Counts(counts) => PayloadValues::Counts(counts.clone()),
            Values::Matrix(counts) => PayloadValues::Floats(counts.clone()),
            Values::Efficiency(view) => {
                let cols = view.efficiency.len();
                let mut data = view.efficiency;
                let rows = match view.uncertainty {
                    Some(uncertainty) => {
                        data.extend(uncertainty);
                        2
                    }
                    None => 1,
                };
                PayloadValues::Floats(CountsBuffer::from_vec(rows, cols, data))
            }
            Values::EfficiencyMatrix(view) => PayloadValues::Floats(view.efficiency),
        }
    }
}

/// A named, optionally compressed array: everything a persistence layer
/// writes for one accumulator.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayPayload {
    pub name: String,
    pub compression: Compression,
    pub edges: Vec<f64>,
    pub values: PayloadValues,
}

impl ArrayPayload {
    pub fn from_accumulator<A: ReadableAccumulator + ?Sized>(accumulator: &A) -> ArrayPayload {
        ArrayPayload {
            name: accumulator.name().to_owned(),
            compression: accumulator.compression(),
            edges: accumulator.edges().as_slice().to_vec(),
            values: accumulator.read_values().into(),
        }
    }

    fn encode_body(&self) -> Result<BytesMut, SerializationError> {
        let (rows, cols) = self.values.shape();
        let name = self.name.as_bytes();
        if name.len() > u32::MAX as usize {
            return Err(SerializationError::NameTooLong(name.len()));
        }
        if rows > u32::MAX as usize || cols > u32::MAX as usize || self.edges.len() > u32::MAX as usize {
            return Err(SerializationError::ShapeExceedsU32 { rows, cols });
        }

        let words = self.values.words();
        let mut body = BytesMut::with_capacity(4 + name.len() + 13 + WORD * (self.edges.len() + words.len()));
        body.put_u32(name.len() as u32);
        body.put_slice(name);
        body.put_u8(self.values.kind());
        body.put_u32(rows as u32);
        body.put_u32(cols as u32);
        body.put_u32(self.edges.len() as u32);

        let mut scratch = vec![0_u8; WORD * self.edges.len().max(words.len())];
        BigEndian::write_f64_into(&self.edges, &mut scratch[..WORD * self.edges.len()]);
        body.put_slice(&scratch[..WORD * self.edges.len()]);
        BigEndian::write_u64_into(&words, &mut scratch[..WORD * words.len()]);
        body.put_slice(&scratch[..WORD * words.len()]);
        Ok(body)
    }

    /// Encodes the payload, deflating the body when compression is requested.
    pub fn serialize(&self) -> Result<BytesMut, SerializationError> {
        let body = self.encode_body()?;
        if !self.compression.is_enabled() {
            let mut buf = BytesMut::with_capacity(4 + body.len());
            buf.put_u32(get_encoding_cookie());
            buf.put_slice(&body);
            return Ok(buf);
        }

        let compressed = self.compression.compress(&body);
        let mut buf = BytesMut::with_capacity(8 + compressed.len());
        buf.put_u32(get_compressed_encoding_cookie());
        buf.put_u32(compressed.len() as u32);
        buf.put_slice(&compressed);
        Ok(buf)
    }

    /// Reverses [`ArrayPayload::serialize`]. A compressed payload decodes with
    /// the default deflate level, which is not recorded.
    pub fn deserialize(mut buf: &[u8]) -> Result<ArrayPayload, DeserializationError> {
        let cookie = BigEndian::read_u32(take(&mut buf, 4)?);
        match get_cookie_base(cookie) {
            ENCODING_COOKIE_BASE => decode_body(buf, Compression::None),
            COMPRESSED_ENCODING_COOKIE_BASE => {
                let length = BigEndian::read_u32(take(&mut buf, 4)?) as usize;
                let body = compression::decompress(take(&mut buf, length)?)?;
                decode_body(&body, Compression::from_flag(true))
            }
            _ => Err(DeserializationError::CookieNotRecognized(cookie)),
        }
    }
}

fn take<'a>(buf: &mut &'a [u8], n: usize) -> Result<&'a [u8], DeserializationError> {
    if buf.len() < n {
        return Err(DeserializationError::Truncated);
    }
    let (head, tail) = buf.split_at(n);
    *buf = tail;
    Ok(head)
}

fn decode_body(mut buf: &[u8], compression: Compression) -> Result<ArrayPayload, DeserializationError> {
    let name_len = BigEndian::read_u32(take(&mut buf, 4)?) as usize;
    let name = std::str::from_utf8(take(&mut buf, name_len)?)
        .map_err(|_| DeserializationError::InvalidName)?
        .to_owned();
    let kind = take(&mut buf, 1)?[0];
    let rows = BigEndian::read_u32(take(&mut buf, 4)?) as usize;
    let cols = BigEndian::read_u32(take(&mut buf, 4)?) as usize;
    let edge_count = BigEndian::read_u32(take(&mut buf, 4)?) as usize;

    let raw_edges = take(&mut buf, WORD * edge_count)?;
    let mut edges = vec![0.0_f64; edge_count];
    BigEndian::read_f64_into(raw_edges, &mut edges);

    let expected = rows.saturating_mul(cols);
    if expected.checked_mul(WORD) != Some(buf.len()) {
        return Err(DeserializationError::PayloadSizeMismatch {
            expected,
            actual: buf.len() / WORD,
        });
    }
    let mut words = vec![0_u64; expected];
    BigEndian::read_u64_into(buf, &mut words);

    let values = if kind == u64::value_kind() {
        PayloadValues::Counts(CountsBuffer::from_vec(rows, cols, words))
    } else if kind == f64::value_kind() {
        PayloadValues::Floats(CountsBuffer::from_vec(rows, cols, words.into_iter().map(f64::from_word).collect()))
    } else {
        return Err(DeserializationError::UnknownValueKind(kind));
    };

    Ok(ArrayPayload {
        name,
        compression,
        edges,
        values,
    })
}
