use anyhow::Context;
use miniz_oxide::{deflate::compress_to_vec_zlib, inflate::decompress_to_vec_zlib};

use crate::{filters::Filter, pixel::Pixel};

/// Lays out one RGBA scanline: the filter byte, then the raw samples.
pub fn encode_scanline(filter: Filter, pixels: &[Pixel]) -> Vec<u8> {
    let mut scanline = Vec::with_capacity(pixels.len() * 4 + 1);
    scanline.push(filter as u8);
    scanline.extend(pixels.iter().flat_map(|p| p.to_rgba()));
    scanline
}

pub fn compress_data(data: &[u8]) -> Vec<u8> {
    compress_to_vec_zlib(data, 9)
}

pub fn decompress_data(compressed_data: &[u8]) -> anyhow::Result<Vec<u8>> {
    decompress_to_vec_zlib(compressed_data).context("Failed to decompress image data.")
}
