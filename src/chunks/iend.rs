use super::PngChunk;

pub struct IENDChunk;
impl PngChunk for IENDChunk {
    const HEADER: &'static [u8; 4] = b"IEND";

    fn write_payload(&self, _out: &mut Vec<u8>) {}
}
