//! Conversion of raw detection records into timeline obstructions.
//!
//! Both telemetry channels carry the same geometric information behind
//! different payload shapes; this module flattens them into a single
//! obstruction candidate type so the downstream filtering and selection
//! logic exists once.

use capshift_models::rect::{NormalizedRect, PixelRect};
use capshift_models::telemetry::{FaceRecord, TextRecord};

/// Which telemetry channel produced a detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionChannel {
    /// Detected face
    Face,
    /// Detected on-screen text block
    OnScreenText,
}

/// One detection sample placed on the video timeline, in absolute pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedDetection {
    /// Sample time in seconds
    pub t: f64,
    /// Bounding box in pixel space
    pub rect: PixelRect,
    /// Producing channel
    pub channel: DetectionChannel,
    /// Recognized content, present for text detections only
    pub label: Option<String>,
}

impl TimedDetection {
    fn new(
        timestamp_ms: u64,
        bbox: NormalizedRect,
        frame: &PixelRect,
        channel: DetectionChannel,
        label: Option<String>,
    ) -> Self {
        Self {
            t: timestamp_ms as f64 / 1000.0,
            rect: bbox.to_pixels(frame),
            channel,
            label,
        }
    }

    /// Build a timeline obstruction from a face detection record.
    pub fn from_face(record: &FaceRecord, frame: &PixelRect) -> Self {
        Self::new(
            record.timestamp,
            record.face.bounding_box.into(),
            frame,
            DetectionChannel::Face,
            None,
        )
    }

    /// Build a timeline obstruction from a text detection record.
    pub fn from_text(record: &TextRecord, frame: &PixelRect) -> Self {
        Self::new(
            record.timestamp,
            record.text_detection.geometry.bounding_box.into(),
            frame,
            DetectionChannel::OnScreenText,
            Some(record.text_detection.detected_text.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capshift_models::telemetry::{FaceDetail, RawBoundingBox, TextDetail, TextGeometry};

    fn face_record(timestamp: u64, left: f64, top: f64, width: f64, height: f64) -> FaceRecord {
        FaceRecord {
            timestamp,
            face: FaceDetail {
                bounding_box: RawBoundingBox { left, top, width, height },
            },
        }
    }

    #[test]
    fn test_face_conversion() {
        let frame = PixelRect::frame(1000.0, 500.0);
        let detection = TimedDetection::from_face(&face_record(2500, 0.2, 0.4, 0.1, 0.2), &frame);

        assert_eq!(detection.t, 2.5);
        assert_eq!(detection.rect, PixelRect::new(200.0, 200.0, 100.0, 100.0));
        assert_eq!(detection.channel, DetectionChannel::Face);
        assert_eq!(detection.label, None);
    }

    #[test]
    fn test_text_conversion_carries_label() {
        let frame = PixelRect::frame(1000.0, 1000.0);
        let record = TextRecord {
            timestamp: 100,
            text_detection: TextDetail {
                geometry: TextGeometry {
                    bounding_box: RawBoundingBox {
                        left: 0.75,
                        top: 0.85,
                        width: 0.25,
                        height: 0.15,
                    },
                },
                detected_text: "LIVE".to_string(),
            },
        };
        let detection = TimedDetection::from_text(&record, &frame);

        assert_eq!(detection.t, 0.1);
        assert_eq!(detection.rect, PixelRect::new(750.0, 850.0, 250.0, 150.0));
        assert_eq!(detection.channel, DetectionChannel::OnScreenText);
        assert_eq!(detection.label.as_deref(), Some("LIVE"));
    }

    #[test]
    fn test_out_of_range_coordinates_are_not_clamped() {
        let frame = PixelRect::frame(1000.0, 1000.0);
        let detection = TimedDetection::from_face(&face_record(0, -0.05, 0.9, 1.1, 0.3), &frame);

        assert_eq!(detection.rect.x, -50.0);
        assert_eq!(detection.rect.w, 1100.0);
        assert_eq!(detection.rect.bottom(), 1200.0);
    }
}
