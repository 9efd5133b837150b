use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One subtitle line with an active time window.
///
/// Times are in seconds from the start of the video. The engine only reads
/// `start`/`end` and writes `style`; `text` is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Cue {
    /// Start of the active interval in seconds
    pub start: f64,
    /// End of the active interval in seconds
    pub end: f64,
    /// Caption text payload
    pub text: String,
    /// WebVTT cue settings string; empty means default (centered) rendering
    #[serde(default)]
    pub style: String,
}

impl Cue {
    /// Create a cue with no style applied.
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            style: String::new(),
        }
    }
}
