use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A normalized rectangle (0.0 to 1.0) representing a relative region of a frame.
///
/// Upstream detectors emit bounding boxes in this space. Out-of-range values
/// (negative, >1.0) are possible on noisy detector output and are passed
/// through unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NormalizedRect {
    /// X coordinate of the top-left corner (0.0 = left, 1.0 = right)
    pub x: f64,
    /// Y coordinate of the top-left corner (0.0 = top, 1.0 = bottom)
    pub y: f64,
    /// Width of the rectangle (0.0 to 1.0)
    pub width: f64,
    /// Height of the rectangle (0.0 to 1.0)
    pub height: f64,
}

impl NormalizedRect {
    /// Create a new normalized rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Check if the rectangle lies within the 0.0-1.0 range.
    ///
    /// Diagnostic only; callers do not reject or clamp out-of-range boxes.
    pub fn is_in_range(&self) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.width >= 0.0
            && self.height >= 0.0
            && self.x + self.width <= 1.001 // Allow small epsilon for float precision
            && self.y + self.height <= 1.001
    }

    /// Project this rectangle into absolute pixel space against a frame.
    pub fn to_pixels(&self, frame: &PixelRect) -> PixelRect {
        PixelRect {
            x: self.x * frame.w,
            y: self.y * frame.h,
            w: self.width * frame.w,
            h: self.height * frame.h,
        }
    }
}

/// An absolute rectangle in pixel units, origin at the frame's top-left.
///
/// Coordinates may exceed the frame bounds (detector noise) and are not
/// clamped. Zero-area rectangles are valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PixelRect {
    /// X coordinate of the top-left corner in pixels
    pub x: f64,
    /// Y coordinate of the top-left corner in pixels
    pub y: f64,
    /// Width in pixels
    pub w: f64,
    /// Height in pixels
    pub h: f64,
}

/// Horizontal offset of the caption band as a fraction of frame width.
pub const CAPTION_BAND_X: f64 = 0.1;
/// Vertical offset of the caption band as a fraction of frame height.
pub const CAPTION_BAND_Y: f64 = 0.8;
/// Caption band width as a fraction of frame width.
pub const CAPTION_BAND_W: f64 = 0.75;
/// Caption band height as a fraction of frame height.
pub const CAPTION_BAND_H: f64 = 0.2;

impl PixelRect {
    /// Create a new pixel rectangle.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// The full video frame as a rectangle anchored at the origin.
    pub fn frame(width: f64, height: f64) -> Self {
        Self { x: 0.0, y: 0.0, w: width, h: height }
    }

    /// The fixed band where captions are expected to render.
    ///
    /// A heuristic over the lower portion of the frame; not configurable.
    pub fn caption_band(frame: &PixelRect) -> Self {
        Self {
            x: frame.w * CAPTION_BAND_X,
            y: frame.h * CAPTION_BAND_Y,
            w: frame.w * CAPTION_BAND_W,
            h: frame.h * CAPTION_BAND_H,
        }
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}
