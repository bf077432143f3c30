// Unit tests for business rules

use super::*;
use tempfile::TempDir;

fn touch(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, b"not really a video").unwrap();
    path
}

#[test]
fn test_derive_output_path() {
    let rules = ClipRules::default();
    let output = rules
        .derive_output_path(Path::new("/videos/holiday trip.mp4"))
        .unwrap();
    assert_eq!(output, PathBuf::from("/videos/holiday trip_clip.mp4"));
}

#[test]
fn test_derive_output_path_keeps_extension_case() {
    let rules = ClipRules::default();
    let output = rules.derive_output_path(Path::new("/videos/A.MP4")).unwrap();
    assert_eq!(output, PathBuf::from("/videos/A_clip.MP4"));
}

#[test]
fn test_empty_suffix_is_rejected() {
    let rules = ClipRules::new("mp4", "");
    let err = rules
        .derive_output_path(Path::new("/videos/a.mp4"))
        .unwrap_err();
    assert!(matches!(err, TrimError::InvalidRequest { .. }));
}

#[test]
fn test_extension_is_case_insensitive() {
    let rules = ClipRules::new(".mp4", "_clip");
    assert_eq!(rules.container_extension, "mp4");
    assert!(rules.has_supported_extension(Path::new("a.Mp4")));
    assert!(!rules.has_supported_extension(Path::new("a.mkv")));
    assert!(!rules.has_supported_extension(Path::new("mp4")));
}

#[test]
fn test_check_input_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = ClipRules::default()
        .check_input(&dir.path().join("missing.mp4"))
        .unwrap_err();
    assert!(matches!(err, TrimError::InputNotFound { .. }));
    assert!(err.is_validation());
}

#[test]
fn test_check_input_directory_is_not_a_file() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("folder.mp4");
    std::fs::create_dir(&sub).unwrap();
    let err = ClipRules::default().check_input(&sub).unwrap_err();
    assert!(matches!(err, TrimError::InputNotFound { .. }));
}

#[test]
fn test_check_input_wrong_extension() {
    let dir = TempDir::new().unwrap();
    let path = touch(&dir, "movie.mkv");
    let err = ClipRules::default().check_input(&path).unwrap_err();
    assert!(matches!(err, TrimError::UnsupportedFormat { .. }));
}

#[test]
fn test_build_request() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "movie.mp4");

    let request = ClipRules::default()
        .build_request(dir.path(), "movie.mp4", "00:00:05")
        .unwrap();

    assert_eq!(request.input_path, dir.path().join("movie.mp4"));
    assert_eq!(request.output_path, dir.path().join("movie_clip.mp4"));
    assert_eq!(request.start_offset, "00:00:05");
    assert_ne!(request.input(), request.output());
}

#[test]
fn test_build_request_passes_offset_verbatim() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "movie.mp4");

    let request = ClipRules::default()
        .build_request(dir.path(), "movie.mp4", "not-a-time")
        .unwrap();
    assert_eq!(request.start_offset, "not-a-time");
}
