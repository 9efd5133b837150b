//! Detection telemetry payload shapes.
//!
//! These mirror the JSON emitted by the upstream video analysis jobs: two
//! independent channels (detected faces, detected on-screen text), each an
//! array of timestamped records with bounding boxes normalized to the frame.
//! Field names are PascalCase on the wire. Upstream attaches additional
//! fields (confidence, pose, quality) which are ignored here.

use crate::rect::NormalizedRect;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A bounding box normalized to `[0,1]` of frame width/height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RawBoundingBox {
    /// Left edge as a fraction of frame width
    pub left: f64,
    /// Top edge as a fraction of frame height
    pub top: f64,
    /// Width as a fraction of frame width
    pub width: f64,
    /// Height as a fraction of frame height
    pub height: f64,
}

impl From<RawBoundingBox> for NormalizedRect {
    fn from(bbox: RawBoundingBox) -> Self {
        NormalizedRect::new(bbox.left, bbox.top, bbox.width, bbox.height)
    }
}

/// One face detection sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct FaceRecord {
    /// Sample time in milliseconds from the start of the video
    pub timestamp: u64,
    /// Face payload
    pub face: FaceDetail,
}

/// Face payload within a detection record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct FaceDetail {
    /// Normalized bounding box of the face
    pub bounding_box: RawBoundingBox,
}

/// One on-screen text detection sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TextRecord {
    /// Sample time in milliseconds from the start of the video
    pub timestamp: u64,
    /// Text detection payload
    pub text_detection: TextDetail,
}

/// Text payload within a detection record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TextDetail {
    /// Geometry wrapper around the bounding box
    pub geometry: TextGeometry,
    /// The recognized text content
    pub detected_text: String,
}

/// Geometry wrapper for a text detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TextGeometry {
    /// Normalized bounding box of the text block
    pub bounding_box: RawBoundingBox,
}

/// Frame dimensions of the analyzed video.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct FrameMetadata {
    /// Frame width in pixels
    pub frame_width: f64,
    /// Frame height in pixels
    pub frame_height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_record_deserializes_wire_format() {
        let json = r#"{
            "Timestamp": 4500,
            "Face": {
                "BoundingBox": {
                    "Left": 0.25,
                    "Top": 0.1,
                    "Width": 0.15,
                    "Height": 0.3
                },
                "Confidence": 99.8,
                "Pose": {"Yaw": 1.2}
            }
        }"#;
        let record: FaceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.timestamp, 4500);
        assert_eq!(record.face.bounding_box.left, 0.25);
        assert_eq!(record.face.bounding_box.height, 0.3);
    }

    #[test]
    fn test_text_record_deserializes_wire_format() {
        let json = r#"{
            "Timestamp": 12000,
            "TextDetection": {
                "DetectedText": "BREAKING NEWS",
                "Type": "LINE",
                "Geometry": {
                    "BoundingBox": {
                        "Left": 0.6,
                        "Top": 0.85,
                        "Width": 0.35,
                        "Height": 0.1
                    },
                    "Polygon": []
                }
            }
        }"#;
        let record: TextRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.timestamp, 12000);
        assert_eq!(record.text_detection.detected_text, "BREAKING NEWS");
        assert_eq!(record.text_detection.geometry.bounding_box.left, 0.6);
    }

    #[test]
    fn test_frame_metadata() {
        let meta: FrameMetadata =
            serde_json::from_str(r#"{"FrameWidth": 1920, "FrameHeight": 1080}"#).unwrap();
        assert_eq!(meta.frame_width, 1920.0);
        assert_eq!(meta.frame_height, 1080.0);
    }
}
