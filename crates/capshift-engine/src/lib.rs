//! Caption collision-avoidance engine.
//!
//! Decides, for every subtitle cue in a track, whether the caption must be
//! shifted horizontally so it does not collide with a detected face or
//! on-screen text block occupying the band where captions render.
//!
//! This crate provides:
//! - Conversion of normalized detection records into pixel-space timeline
//!   obstructions
//! - A temporal coexistence filter matching detections to cue windows
//! - The obstruction analyzer producing a per-cue shift directive
//! - A cue styler writing the resulting WebVTT style strings onto the track
//!
//! The whole pipeline is a synchronous, single-pass, stateless transform:
//! either every cue receives a style decision or input preparation fails
//! before any output is produced.

pub mod coexistence;
pub mod error;
pub mod geometry;
pub mod obstruction;
pub mod styler;
pub mod telemetry;

pub use coexistence::{coexisting, COEXISTENCE_MARGIN_SECS};
pub use error::{EngineError, EngineResult};
pub use geometry::{DetectionChannel, TimedDetection};
pub use obstruction::{ObstructionAnalyzer, MIN_OBSTRUCTION_WIDTH_FRACTION};
pub use styler::CueStyler;
pub use telemetry::{
    parse_cue_track, parse_face_channel, parse_frame_metadata, parse_text_channel,
};
