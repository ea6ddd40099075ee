use anyhow::anyhow;
use nom::{
    bytes::complete::{tag, take},
    combinator::map_res,
    number::complete::be_u32,
    sequence::pair,
    IResult,
};

use crate::{
    crc::{calculate_crc, Crc},
    fixture::PNG_SIGNATURE,
};

pub mod idat;
pub mod iend;
pub mod ihdr;

/// A chunk that knows its four byte tag and how to lay out its payload.
pub trait PngChunk {
    const HEADER: &'static [u8; 4];

    fn write_payload(&self, out: &mut Vec<u8>);

    /// Length, tag, payload and the CRC of tag plus payload, in that order.
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0; 4];
        bytes.extend(Self::HEADER);
        self.write_payload(&mut bytes);
        let len = (bytes.len() - 8) as u32;
        bytes[..4].copy_from_slice(&len.to_be_bytes());
        let crc = calculate_crc(&bytes[4..]).to_be_bytes();
        bytes.extend(crc);
        bytes
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct RawChunk<'a> {
    pub tag: &'a [u8; 4],
    pub data: &'a [u8],
}
impl RawChunk<'_> {
    pub fn tag_str(&self) -> &str {
        std::str::from_utf8(self.tag).unwrap_or("????")
    }
}

pub fn parse_signature(input: &[u8]) -> IResult<&[u8], &[u8]> {
    tag(&PNG_SIGNATURE[..])(input)
}

pub fn iter_chunks(source: &[u8]) -> ChunkIter<'_> {
    ChunkIter {
        source,
        offset: 0,
        finished: false,
    }
}

pub struct ChunkIter<'a> {
    source: &'a [u8],
    offset: usize,
    finished: bool,
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = anyhow::Result<RawChunk<'a>>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match valid_chunk(self.source) {
            Ok((rest, chunk)) => {
                self.offset += self.source.len() - rest.len();
                self.source = rest;
                if chunk.tag == iend::IENDChunk::HEADER {
                    self.finished = true;
                }
                Some(Ok(chunk))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(anyhow!(
                    "Malformed chunk at offset {}: {:?}",
                    self.offset,
                    e
                )))
            }
        }
    }
}

fn valid_chunk(input: &[u8]) -> IResult<&[u8], RawChunk<'_>> {
    let (input, length) = be_u32(input)?;
    let (input, (chunk_tag, data)) =
        pair(map_res(take(4usize), <&[u8; 4]>::try_from), take(length))(input)?;
    let crc = Crc::new().update(chunk_tag).update(data).finish().to_be_bytes();
    let (input, _) = tag(&crc[..])(input)?;
    Ok((input, RawChunk { tag: chunk_tag, data }))
}
