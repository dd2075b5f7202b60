use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::centroids::load_centroids;
use super::spectrum::load_spectrum;
use super::{InputError, data_extension};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("arclines_input_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

#[test]
fn test_data_extension_sees_through_gz() {
    assert_eq!(data_extension(Path::new("a/arc.json.gz")), "json");
    assert_eq!(data_extension(Path::new("arc.ASCII")), "ascii");
    assert_eq!(data_extension(Path::new("arc")), "");
}

#[test]
fn test_ascii_spectrum_with_header() {
    let dir = make_temp_dir();
    let path = dir.join("arc.ascii");
    write_file(&path, "# comment\nflux\n1.5\n2.5\n\n3.0 9.0\n");
    assert_eq!(load_spectrum(&path, 0).unwrap(), vec![1.5, 2.5, 3.0]);
}

#[test]
fn test_ascii_spectrum_bad_row() {
    let dir = make_temp_dir();
    let path = dir.join("arc.txt");
    write_file(&path, "1.0\nabc\n");
    let err = load_spectrum(&path, 0).unwrap_err();
    assert!(matches!(err, InputError::Parse { line: 2, .. }));
}

#[test]
fn test_json_spectrum_gz() {
    let dir = make_temp_dir();
    let path = dir.join("arc.json.gz");
    write_gz(&path, r#"{"spec": [0.0, 10.0, 4.5]}"#);
    assert_eq!(load_spectrum(&path, 0).unwrap(), vec![0.0, 10.0, 4.5]);
}

#[test]
fn test_json_multi_arc() {
    let dir = make_temp_dir();
    let path = dir.join("arcs.json");
    write_file(
        &path,
        r#"{"arcs": [{"spec": [1.0]}, {"spec": [2.0, 3.0]}]}"#,
    );
    assert_eq!(load_spectrum(&path, 1).unwrap(), vec![2.0, 3.0]);
    assert!(load_spectrum(&path, 5).is_err());
}

#[test]
fn test_json_missing_spec() {
    let dir = make_temp_dir();
    let path = dir.join("arc.json");
    write_file(&path, r#"{"wave": [1.0]}"#);
    assert!(matches!(
        load_spectrum(&path, 0),
        Err(InputError::InvalidInput(_))
    ));
}

#[test]
fn test_unsupported_spectrum() {
    let dir = make_temp_dir();
    for name in ["arc.fits", "arc.hdf5", "arc.fits.gz"] {
        let path = dir.join(name);
        write_file(&path, "");
        assert!(matches!(
            load_spectrum(&path, 0),
            Err(InputError::Unsupported(_))
        ));
    }
}

#[test]
fn test_centroids_sorted() {
    let dir = make_temp_dir();
    let path = dir.join("centroids.txt");
    write_file(&path, "pixel amp\n220.0 5\n100.0 3\n160.0 1\n140.0 2\n");
    assert_eq!(
        load_centroids(&path).unwrap(),
        vec![100.0, 140.0, 160.0, 220.0]
    );
}

#[test]
fn test_centroids_duplicates_rejected() {
    let dir = make_temp_dir();
    let path = dir.join("centroids.txt");
    write_file(&path, "100.0\n140.0\n100.0\n");
    assert!(matches!(
        load_centroids(&path),
        Err(InputError::InvalidInput(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = make_temp_dir();
    let err = load_centroids(&dir.join("nope.txt")).unwrap_err();
    assert!(matches!(err, InputError::Io(_)));
}
