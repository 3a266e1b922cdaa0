use crate::core::DeserializationError;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use miniz_oxide::inflate::decompress_to_vec_zlib;

/// How an accumulator asks to be stored.
///
/// Advisory only: computed values never depend on it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Compression {
    None,
    /// zlib deflate at the given level (0-10).
    Deflate(u8),
}

impl Compression {
    pub fn from_flag(compress: bool) -> Compression {
        if compress {
            Compression::Deflate(CompressionLevel::DefaultLevel as u8)
        } else {
            Compression::None
        }
    }

    #[inline(always)]
    pub fn is_enabled(&self) -> bool {
        *self != Compression::None
    }

    pub(crate) fn compress(&self, body: &[u8]) -> Vec<u8> {
        match *self {
            Compression::None => body.to_vec(),
            Compression::Deflate(level) => compress_to_vec_zlib(body, level),
        }
    }
}

impl Default for Compression {
    fn default() -> Compression {
        Compression::from_flag(true)
    }
}

pub(crate) fn decompress(body: &[u8]) -> Result<Vec<u8>, DeserializationError> {
    decompress_to_vec_zlib(body).map_err(|_| DeserializationError::DecompressionFailed)
}
