use super::PngChunk;
use crate::image_data::{compress_data, decompress_data};

#[derive(Debug)]
pub struct IDATChunk<T> {
    pub data: T,
}
impl IDATChunk<Vec<u8>> {
    /// Compresses already filtered scanlines into a single data chunk.
    pub fn from_scanlines(scanlines: &[u8]) -> Self {
        Self {
            data: compress_data(scanlines),
        }
    }
}
impl<T: AsRef<[u8]>> IDATChunk<T> {
    pub fn decode_data(&self) -> anyhow::Result<Vec<u8>> {
        decompress_data(self.data.as_ref())
    }
}
impl<T: AsRef<[u8]>> PngChunk for IDATChunk<T> {
    const HEADER: &'static [u8; 4] = b"IDAT";

    fn write_payload(&self, out: &mut Vec<u8>) {
        out.extend(self.data.as_ref());
    }
}
