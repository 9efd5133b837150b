//! Horizontal shift directives and their WebVTT wire strings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The placement decision for a single cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ShiftDirective {
    /// No qualifying obstruction; leave the caption centered
    #[default]
    RemainCenter,
    /// Obstruction sits right of center; anchor the caption to the left
    ShiftLeft,
    /// Obstruction sits left of center; anchor the caption to the right
    ShiftRight,
}

impl ShiftDirective {
    /// All directives a cue can receive.
    pub const ALL: &'static [ShiftDirective] = &[
        ShiftDirective::RemainCenter,
        ShiftDirective::ShiftLeft,
        ShiftDirective::ShiftRight,
    ];

    /// The exact cue settings string consumed by downstream subtitle
    /// renderers. Must match byte-for-byte.
    pub fn style_string(&self) -> &'static str {
        match self {
            ShiftDirective::RemainCenter => "",
            ShiftDirective::ShiftLeft => "position:50% align:end",
            ShiftDirective::ShiftRight => "position:50% align:start",
        }
    }

    /// The directive name as used in logs and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftDirective::RemainCenter => "remain-center",
            ShiftDirective::ShiftLeft => "shift-left",
            ShiftDirective::ShiftRight => "shift-right",
        }
    }
}

impl fmt::Display for ShiftDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShiftDirective {
    type Err = DirectiveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "remain-center" => Ok(ShiftDirective::RemainCenter),
            "shift-left" => Ok(ShiftDirective::ShiftLeft),
            "shift-right" => Ok(ShiftDirective::ShiftRight),
            _ => Err(DirectiveParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown shift directive: {0}")]
pub struct DirectiveParseError(String);
