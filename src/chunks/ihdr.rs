use nom::{
    combinator::map_res,
    number::complete::{be_u32, u8},
    sequence::tuple,
    IResult,
};

use super::PngChunk;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct IHDRChunk {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: ColorType,
    pub compression_method: u8,
    pub filter_method: u8,
    pub interlace_method: Interlacing,
}
impl IHDRChunk {
    /// A single 8-bit RGBA pixel, deflate compressed, adaptive filtering, not interlaced.
    pub fn fixture() -> Self {
        Self {
            width: 1,
            height: 1,
            bit_depth: 8,
            color_type: ColorType::TruecolorWithAlpha,
            compression_method: 0,
            filter_method: 0,
            interlace_method: Interlacing::None,
        }
    }

    /// Bytes per scanline including the leading filter byte.
    pub fn scanline_size(&self) -> usize {
        let bits = self.width as usize
            * self.color_type.channel_count() as usize
            * self.bit_depth as usize;
        bits.div_ceil(8) + 1
    }
}
impl PngChunk for IHDRChunk {
    const HEADER: &'static [u8; 4] = b"IHDR";

    fn write_payload(&self, out: &mut Vec<u8>) {
        out.extend(self.width.to_be_bytes());
        out.extend(self.height.to_be_bytes());
        out.extend([
            self.bit_depth,
            self.color_type as u8,
            self.compression_method,
            self.filter_method,
            self.interlace_method as u8,
        ]);
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ColorType {
    Greyscale = 0,
    Truecolor = 2,
    IndexedColor = 3,
    GreyscaleWithAlpha = 4,
    TruecolorWithAlpha = 6,
}
impl TryFrom<u8> for ColorType {
    type Error = u8;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Greyscale),
            2 => Ok(Self::Truecolor),
            3 => Ok(Self::IndexedColor),
            4 => Ok(Self::GreyscaleWithAlpha),
            6 => Ok(Self::TruecolorWithAlpha),
            other => Err(other),
        }
    }
}
impl ColorType {
    pub fn channel_count(&self) -> u8 {
        match self {
            Self::Greyscale => 1,
            Self::IndexedColor => 1,
            Self::GreyscaleWithAlpha => 2,
            Self::Truecolor => 3,
            Self::TruecolorWithAlpha => 4,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Interlacing {
    None = 0,
    Adam7 = 1,
}
impl TryFrom<u8> for Interlacing {
    type Error = u8;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Adam7),
            other => Err(other),
        }
    }
}

pub fn parse_data(chunk_data: &[u8]) -> IResult<&[u8], IHDRChunk> {
    let (rest, (width, height, bit_depth, color_type, compression_method, filter_method)) =
        tuple((
            be_u32,
            be_u32,
            u8,
            map_res(u8, ColorType::try_from),
            u8,
            u8,
        ))(chunk_data)?;
    let (rest, interlace_method) = map_res(u8, Interlacing::try_from)(rest)?;
    Ok((
        rest,
        IHDRChunk {
            width,
            height,
            bit_depth,
            color_type,
            compression_method,
            filter_method,
            interlace_method,
        },
    ))
}
