pub mod chunks;
mod crc;
mod filters;
mod fixture;
mod image_data;
mod pixel;

pub use filters::Filter;
pub use fixture::{
    build_image_bytes, confirmation, write_to_path, DEFAULT_OUTPUT_PATH, PNG_SIGNATURE,
};
pub use image_data::{compress_data, decompress_data, encode_scanline};
pub use pixel::Pixel;
