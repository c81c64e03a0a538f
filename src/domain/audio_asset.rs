/// Generic binary type sent by clients that do not know the real
/// content type of an upload (e.g. mobile SDKs streaming raw buffers).
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

const DEFAULT_AUDIO_TYPE: &str = "audio/wav";

/// Extension lookup used when the declared content type is absent or
/// the generic binary fallback. Keys must be lower-case.
const EXTENSION_TYPES: &[(&str, &str)] = &[
    ("aac", "audio/aac"),
    ("aif", "audio/aiff"),
    ("aiff", "audio/aiff"),
    ("amr", "audio/amr"),
    ("flac", "audio/flac"),
    ("m4a", "audio/mp4"),
    ("mp3", "audio/mpeg"),
    ("mp4", "audio/mp4"),
    ("oga", "audio/ogg"),
    ("ogg", "audio/ogg"),
    ("opus", "audio/opus"),
    ("wav", "audio/wav"),
    ("webm", "audio/webm"),
    ("3gp", "audio/3gpp"),
];

/// An uploaded audio payload, scoped to a single request.
///
/// The declared content type and filename are advisory only; the bytes
/// are the source of truth and must be non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioAsset {
    pub bytes: Vec<u8>,
    pub declared_type: Option<String>,
    pub filename: Option<String>,
}

#[derive(Debug, thiserror::Error)]
#[error("audio payload is empty")]
pub struct EmptyAudio;

impl AudioAsset {
    pub fn new(
        bytes: Vec<u8>,
        declared_type: Option<String>,
        filename: Option<String>,
    ) -> Result<Self, EmptyAudio> {
        if bytes.is_empty() {
            return Err(EmptyAudio);
        }
        Ok(Self {
            bytes,
            declared_type,
            filename,
        })
    }

    /// Best-effort content type to hand to the inference service.
    ///
    /// A declared type wins unless it is the generic binary fallback,
    /// in which case the filename extension is consulted. Always
    /// returns a non-empty type.
    pub fn resolve_content_type(&self) -> String {
        if let Some(declared) = self.declared_type.as_deref() {
            if !declared.is_empty() && declared != FALLBACK_CONTENT_TYPE {
                return declared.to_string();
            }
        }

        self.filename
            .as_deref()
            .and_then(type_from_extension)
            .unwrap_or(DEFAULT_AUDIO_TYPE)
            .to_string()
    }
}

fn type_from_extension(filename: &str) -> Option<&'static str> {
    let (_, extension) = filename.rsplit_once('.')?;
    let extension = extension.to_ascii_lowercase();
    EXTENSION_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, content_type)| *content_type)
}
