pub mod compression;
pub mod cookie;
pub mod payload;

pub use self::compression::Compression;
pub use self::payload::{ArrayPayload, PayloadValues};

use crate::accumulator::ReadableAccumulator;
use crate::core::SerializationError;
use bytes::BytesMut;

pub trait SerializableAccumulator: ReadableAccumulator {
    fn payload(&self) -> ArrayPayload {
        ArrayPayload::from_accumulator(self)
    }

    /// Encodes name, values and edges, compressed if the accumulator asks for it.
    fn serialize(&self) -> Result<BytesMut, SerializationError> {
        self.payload().serialize()
    }
}

impl<A: ReadableAccumulator + ?Sized> SerializableAccumulator for A {}
