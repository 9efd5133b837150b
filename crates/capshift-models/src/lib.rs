//! Shared data models for the capshift caption placement engine.
//!
//! This crate provides Serde-serializable types for:
//! - Frame geometry (normalized and absolute pixel rectangles)
//! - Subtitle cues and styled tracks
//! - Shift directives and their WebVTT wire strings
//! - Detection telemetry payload shapes (face and on-screen text channels)

pub mod cue;
pub mod directive;
pub mod rect;
pub mod telemetry;

// Re-export common types
pub use cue::Cue;
pub use directive::{DirectiveParseError, ShiftDirective};
pub use rect::{NormalizedRect, PixelRect};
pub use telemetry::{
    FaceRecord, FrameMetadata, RawBoundingBox, TextRecord,
};
