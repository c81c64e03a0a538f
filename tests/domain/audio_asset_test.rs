use cribsense::domain::{AudioAsset, FALLBACK_CONTENT_TYPE};

fn asset(declared: Option<&str>, filename: Option<&str>) -> AudioAsset {
    AudioAsset::new(
        vec![0u8; 16],
        declared.map(str::to_string),
        filename.map(str::to_string),
    )
    .unwrap()
}

#[test]
fn given_declared_type_when_resolving_then_returns_it_unchanged() {
    let asset = asset(Some("audio/mpeg"), Some("cry.wav"));

    assert_eq!(asset.resolve_content_type(), "audio/mpeg");
}

#[test]
fn given_octet_stream_when_resolving_then_falls_back_to_extension() {
    let asset = asset(Some(FALLBACK_CONTENT_TYPE), Some("cry.mp3"));

    assert_eq!(asset.resolve_content_type(), "audio/mpeg");
}

#[test]
fn given_no_declared_type_when_resolving_then_uses_extension() {
    let asset = asset(None, Some("recording.FLAC"));

    assert_eq!(asset.resolve_content_type(), "audio/flac");
}

#[test]
fn given_unrecognized_extension_when_resolving_then_returns_wav_default() {
    let asset = asset(None, Some("cry.xyz"));

    assert_eq!(asset.resolve_content_type(), "audio/wav");
}

#[test]
fn given_no_type_and_no_filename_when_resolving_then_returns_wav_default() {
    let asset = asset(None, None);

    assert_eq!(asset.resolve_content_type(), "audio/wav");
}

#[test]
fn given_filename_without_extension_when_resolving_then_returns_wav_default() {
    let asset = asset(Some(""), Some("recording"));

    assert_eq!(asset.resolve_content_type(), "audio/wav");
}

#[test]
fn given_empty_bytes_when_constructing_then_rejected() {
    let result = AudioAsset::new(Vec::new(), Some("audio/wav".to_string()), None);

    assert!(result.is_err());
}
