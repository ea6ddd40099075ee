use std::path::PathBuf;

use fixture_png::{confirmation, write_to_path, DEFAULT_OUTPUT_PATH};

/// Writes the fixture to the optional path argument, `example.png` otherwise.
///
/// Diagnostics go to stderr at `warn` and above; `RUST_LOG` raises or lowers that level.
fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));
    let written = write_to_path(&path)?;
    println!("{}", confirmation(&path, written));
    Ok(())
}
