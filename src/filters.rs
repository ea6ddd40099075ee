/// Per-scanline filter type, stored as the first byte of each scanline.
///
/// Only the `None` filter is written: samples follow the filter byte unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    None = 0,
}
