//! Telemetry and track document parsing.
//!
//! Fail-fast boundary for externally supplied JSON: an empty document is a
//! missing input, invalid JSON is a malformed payload. An empty JSON array
//! is a valid (if uneventful) timeline.

use crate::error::{EngineError, EngineResult};
use capshift_models::cue::Cue;
use capshift_models::telemetry::{FaceRecord, FrameMetadata, TextRecord};

fn require_document<'a>(raw: &'a str, what: &str) -> EngineResult<&'a str> {
    if raw.trim().is_empty() {
        return Err(EngineError::missing_input(format!("{what} document is empty")));
    }
    Ok(raw)
}

/// Parse a face channel payload (JSON array of face records).
pub fn parse_face_channel(raw: &str) -> EngineResult<Vec<FaceRecord>> {
    Ok(serde_json::from_str(require_document(raw, "face detection")?)?)
}

/// Parse a text channel payload (JSON array of text records).
pub fn parse_text_channel(raw: &str) -> EngineResult<Vec<TextRecord>> {
    Ok(serde_json::from_str(require_document(raw, "text detection")?)?)
}

/// Parse frame metadata.
pub fn parse_frame_metadata(raw: &str) -> EngineResult<FrameMetadata> {
    Ok(serde_json::from_str(require_document(raw, "frame metadata")?)?)
}

/// Parse a cue track (JSON array of cues).
pub fn parse_cue_track(raw: &str) -> EngineResult<Vec<Cue>> {
    Ok(serde_json::from_str(require_document(raw, "cue track")?)?)
}
