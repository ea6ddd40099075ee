use std::{fs, path::Path};

use anyhow::Context;
use log::{debug, info, log_enabled, Level};

use crate::{
    chunks::{
        idat::IDATChunk, iend::IENDChunk, ihdr::IHDRChunk, iter_chunks, parse_signature, PngChunk,
    },
    filters::Filter,
    image_data::encode_scanline,
    pixel::Pixel,
};

pub const PNG_SIGNATURE: [u8; 8] = *b"\x89PNG\r\n\x1a\n";

/// Where the generator writes when no path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "example.png";

/// Serializes a 1x1 fully transparent RGBA image.
///
/// The output only depends on the bundled deflate implementation, so repeated calls
/// return identical bytes.
pub fn build_image_bytes() -> Vec<u8> {
    let header = IHDRChunk::fixture();
    let scanline = encode_scanline(Filter::None, &[Pixel::TRANSPARENT]);
    debug_assert_eq!(scanline.len(), header.scanline_size());
    let image_data = IDATChunk::from_scanlines(&scanline);

    let mut bytes = PNG_SIGNATURE.to_vec();
    bytes.extend(header.to_bytes());
    bytes.extend(image_data.to_bytes());
    bytes.extend(IENDChunk.to_bytes());
    bytes
}

/// Writes the fixture to `path` in a single call, creating or truncating the file.
///
/// Returns the number of bytes written. A failed write keeps its `std::io::Error`
/// reachable through `downcast_ref`.
pub fn write_to_path<P: AsRef<Path>>(path: P) -> anyhow::Result<usize> {
    let path = path.as_ref();
    let bytes = build_image_bytes();
    log_layout(&bytes);
    fs::write(path, &bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(bytes.len())
}

pub fn confirmation(path: &Path, byte_count: usize) -> String {
    format!("Generated {} ({byte_count} bytes)", path.display())
}

fn log_layout(bytes: &[u8]) {
    if !log_enabled!(Level::Debug) {
        return;
    }
    let Ok((rest, _)) = parse_signature(bytes) else {
        debug!("Output is missing the PNG signature");
        return;
    };
    for chunk in iter_chunks(rest) {
        match chunk {
            Ok(chunk) => debug!("{} chunk, {} byte payload", chunk.tag_str(), chunk.data.len()),
            Err(e) => debug!("{e}"),
        }
    }
}
