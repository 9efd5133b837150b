//! Shift-direction analysis for a single cue.
//!
//! Given the detections coexisting with a cue, decide whether the caption
//! can stay centered or must be anchored left or right to keep clear of
//! faces and on-screen text occupying the caption band.

use crate::geometry::TimedDetection;
use capshift_models::directive::ShiftDirective;
use capshift_models::rect::PixelRect;
use tracing::debug;

/// Obstructions narrower than this fraction of the frame width are noise.
pub const MIN_OBSTRUCTION_WIDTH_FRACTION: f64 = 0.1;

/// Horizontal span covered by the union of qualifying obstructions.
#[derive(Debug, Clone, Copy, PartialEq)]
struct HorizontalExtent {
    /// Leftmost x over all qualifying boxes
    left: f64,
    /// Rightmost x + w over all qualifying boxes
    right: f64,
}

impl HorizontalExtent {
    fn of(rect: &PixelRect) -> Self {
        Self {
            left: rect.x,
            right: rect.right(),
        }
    }

    fn widen(&mut self, rect: &PixelRect) {
        self.left = self.left.min(rect.x);
        self.right = self.right.max(rect.right());
    }
}

/// Decides shift directives against a fixed frame and caption band.
#[derive(Debug, Clone)]
pub struct ObstructionAnalyzer {
    frame: PixelRect,
    caption_band: PixelRect,
    min_width: f64,
}

impl ObstructionAnalyzer {
    /// Create an analyzer for the given frame.
    pub fn new(frame: PixelRect) -> Self {
        let caption_band = PixelRect::caption_band(&frame);
        let min_width = frame.w * MIN_OBSTRUCTION_WIDTH_FRACTION;
        Self {
            frame,
            caption_band,
            min_width,
        }
    }

    /// The caption band this analyzer guards.
    pub fn caption_band(&self) -> &PixelRect {
        &self.caption_band
    }

    /// Whether a box can visually collide with the caption.
    ///
    /// Too-narrow boxes are detector noise; boxes whose bottom edge does not
    /// reach down into the caption band cannot obstruct it.
    fn qualifies(&self, rect: &PixelRect) -> bool {
        !(rect.w < self.min_width || rect.bottom() < self.caption_band.y)
    }

    /// Decide the directive for one cue from its coexisting detections.
    ///
    /// Pure and deterministic; the result does not depend on input order.
    /// With no qualifying obstruction the caption remains centered.
    /// Otherwise the caption moves toward the larger free region, and an
    /// exact tie between the space left of the obstructions and the space
    /// right of them anchors left (strict `<`, kept for output parity with
    /// existing renderers).
    pub fn decide<'a, I>(&self, detections: I) -> ShiftDirective
    where
        I: IntoIterator<Item = &'a TimedDetection>,
    {
        let mut extent: Option<HorizontalExtent> = None;
        for detection in detections {
            if !self.qualifies(&detection.rect) {
                continue;
            }
            match extent.as_mut() {
                Some(e) => e.widen(&detection.rect),
                None => extent = Some(HorizontalExtent::of(&detection.rect)),
            }
        }

        let Some(extent) = extent else {
            return ShiftDirective::RemainCenter;
        };

        let free_right = self.frame.w - extent.right;
        let directive = if extent.left < free_right {
            ShiftDirective::ShiftRight
        } else {
            ShiftDirective::ShiftLeft
        };
        debug!(
            left_most = extent.left,
            right_most = extent.right,
            free_right,
            directive = %directive,
            "Resolved obstruction extent"
        );
        directive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DetectionChannel;

    fn analyzer() -> ObstructionAnalyzer {
        ObstructionAnalyzer::new(PixelRect::frame(1000.0, 1000.0))
    }

    fn face(x: f64, y: f64, w: f64, h: f64) -> TimedDetection {
        TimedDetection {
            t: 0.0,
            rect: PixelRect::new(x, y, w, h),
            channel: DetectionChannel::Face,
            label: None,
        }
    }

    #[test]
    fn test_no_detections_remains_center() {
        assert_eq!(analyzer().decide([]), ShiftDirective::RemainCenter);
    }

    #[test]
    fn test_left_side_face_shifts_right() {
        // leftMost = 0, rightMost = 300, free right = 700 -> shift right
        let detections = vec![face(0.0, 850.0, 300.0, 150.0)];
        assert_eq!(
            analyzer().decide(&detections),
            ShiftDirective::ShiftRight
        );
    }

    #[test]
    fn test_right_side_text_shifts_left() {
        // leftMost = 750, rightMost = 1000, free right = 0 -> shift left
        let detections = vec![TimedDetection {
            t: 0.0,
            rect: PixelRect::new(750.0, 850.0, 250.0, 150.0),
            channel: DetectionChannel::OnScreenText,
            label: Some("LIVE".to_string()),
        }];
        assert_eq!(analyzer().decide(&detections), ShiftDirective::ShiftLeft);
    }

    #[test]
    fn test_exact_tie_shifts_left() {
        // leftMost = 250, rightMost = 750, free right = 250 -> tie -> left
        let detections = vec![face(250.0, 850.0, 500.0, 150.0)];
        assert_eq!(analyzer().decide(&detections), ShiftDirective::ShiftLeft);
    }

    #[test]
    fn test_narrow_box_is_noise() {
        // 99px < 10% of a 1000px frame, otherwise perfectly obstructing
        let detections = vec![face(0.0, 850.0, 99.0, 150.0)];
        assert_eq!(
            analyzer().decide(&detections),
            ShiftDirective::RemainCenter
        );
    }

    #[test]
    fn test_box_above_caption_band_is_ignored() {
        // Bottom edge at 700 < band top at 800; wide and left-anchored,
        // but it cannot collide with the caption
        let detections = vec![face(0.0, 100.0, 600.0, 600.0)];
        assert_eq!(
            analyzer().decide(&detections),
            ShiftDirective::RemainCenter
        );
    }

    #[test]
    fn test_box_touching_band_top_qualifies() {
        // Bottom edge exactly at the band top is not "above" it
        let detections = vec![face(0.0, 650.0, 300.0, 150.0)];
        assert_eq!(
            analyzer().decide(&detections),
            ShiftDirective::ShiftRight
        );
    }

    #[test]
    fn test_union_of_mixed_channels() {
        // Face on the left, text on the right; union spans 0..1000 so
        // leftMost = 0 ties with free right = 0 -> shift left
        let detections = vec![
            face(0.0, 850.0, 300.0, 150.0),
            TimedDetection {
                t: 0.0,
                rect: PixelRect::new(800.0, 850.0, 200.0, 150.0),
                channel: DetectionChannel::OnScreenText,
                label: Some("caption".to_string()),
            },
        ];
        assert_eq!(analyzer().decide(&detections), ShiftDirective::ShiftLeft);
    }

    #[test]
    fn test_order_does_not_affect_result() {
        let a = face(100.0, 850.0, 200.0, 150.0);
        let b = face(600.0, 850.0, 250.0, 150.0);
        let forward = analyzer().decide([&a, &b]);
        let reverse = analyzer().decide([&b, &a]);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_zero_area_box_is_noise() {
        let detections = vec![face(500.0, 900.0, 0.0, 0.0)];
        assert_eq!(
            analyzer().decide(&detections),
            ShiftDirective::RemainCenter
        );
    }
}
