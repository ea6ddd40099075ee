use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use fixture_png::build_image_bytes;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fixture-png-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn run_generator<S: AsRef<OsStr>>(dir: &Path, args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_generate-fixture"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn standard_decoder_reads_transparent_pixel() {
    let bytes = build_image_bytes();
    let decoder = png::Decoder::new(bytes.as_slice());
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();

    assert_eq!((info.width, info.height), (1, 1));
    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    assert_eq!(&buf[..info.buffer_size()], [0, 0, 0, 0]);
}

#[test]
fn cli_writes_requested_path() {
    let dir = scratch_dir("explicit");
    let output = run_generator(&dir, &["out.png"]);
    assert!(output.status.success());

    let on_disk = fs::read(dir.join("out.png")).unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, format!("Generated out.png ({} bytes)\n", on_disk.len()));
    assert_eq!(on_disk, build_image_bytes());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn cli_defaults_to_example_png() {
    let dir = scratch_dir("default");
    let output = run_generator::<&str>(&dir, &[]);
    assert!(output.status.success());

    let on_disk = fs::read(dir.join("example.png")).unwrap();
    assert_eq!(on_disk, build_image_bytes());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.trim_end(),
        format!("Generated example.png ({} bytes)", on_disk.len())
    );
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn cli_fails_for_missing_directory() {
    let dir = scratch_dir("failure");
    let output = run_generator(&dir, &["no/such/dir/out.png"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to write no/such/dir/out.png"));
    fs::remove_dir_all(&dir).unwrap();
}

#[cfg(unix)]
#[test]
fn cli_accepts_non_utf8_path() {
    use std::{ffi::OsString, os::unix::ffi::OsStringExt};

    let dir = scratch_dir("non-utf8");
    let name = OsString::from_vec(b"out\xff.png".to_vec());
    let output = run_generator(&dir, &[&name]);
    assert!(output.status.success());

    let on_disk = fs::read(dir.join(&name)).unwrap();
    assert_eq!(on_disk, build_image_bytes());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        format!("Generated out\u{fffd}.png ({} bytes)\n", on_disk.len())
    );
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn rust_log_keeps_stdout_to_confirmation() {
    let dir = scratch_dir("rust-log");
    let output = Command::new(env!("CARGO_BIN_EXE_generate-fixture"))
        .current_dir(&dir)
        .arg("out.png")
        .env("RUST_LOG", "debug")
        .output()
        .unwrap();
    assert!(output.status.success());

    let on_disk = fs::read(dir.join("out.png")).unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, format!("Generated out.png ({} bytes)\n", on_disk.len()));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("IHDR chunk, 13 byte payload"));
    fs::remove_dir_all(&dir).unwrap();
}
