//! Per-cue orchestration: coexistence query, analysis, style assignment.

use crate::coexistence::coexisting;
use crate::error::{EngineError, EngineResult};
use crate::geometry::TimedDetection;
use crate::obstruction::ObstructionAnalyzer;
use capshift_models::cue::Cue;
use capshift_models::directive::ShiftDirective;
use capshift_models::rect::PixelRect;
use capshift_models::telemetry::{FaceRecord, FrameMetadata, TextRecord};
use tracing::{debug, info};

/// Styles a cue track against a pair of detection timelines.
///
/// Construction converts both telemetry channels to pixel space once;
/// styling is then a stateless pass over the cues. Cues are independent of
/// one another and only their `style` field is touched.
#[derive(Debug, Clone)]
pub struct CueStyler {
    analyzer: ObstructionAnalyzer,
    faces: Vec<TimedDetection>,
    texts: Vec<TimedDetection>,
}

impl CueStyler {
    /// Create a styler for one video.
    ///
    /// Fails with [`EngineError::MissingInput`] when the frame dimensions
    /// are not positive; empty detection timelines are valid and simply
    /// leave every cue centered.
    pub fn new(
        metadata: &FrameMetadata,
        faces: &[FaceRecord],
        texts: &[TextRecord],
    ) -> EngineResult<Self> {
        if metadata.frame_width <= 0.0 || metadata.frame_height <= 0.0 {
            return Err(EngineError::missing_input(format!(
                "frame dimensions must be positive, got {}x{}",
                metadata.frame_width, metadata.frame_height
            )));
        }

        let frame = PixelRect::frame(metadata.frame_width, metadata.frame_height);
        let faces: Vec<TimedDetection> = faces
            .iter()
            .map(|r| TimedDetection::from_face(r, &frame))
            .collect();
        let texts: Vec<TimedDetection> = texts
            .iter()
            .map(|r| TimedDetection::from_text(r, &frame))
            .collect();
        debug!(
            face_samples = faces.len(),
            text_samples = texts.len(),
            frame_width = frame.w,
            frame_height = frame.h,
            "Prepared detection timelines"
        );

        Ok(Self {
            analyzer: ObstructionAnalyzer::new(frame),
            faces,
            texts,
        })
    }

    /// Decide the directive for a single cue.
    pub fn directive_for(&self, cue: &Cue) -> ShiftDirective {
        let faces = coexisting(cue, &self.faces);
        let texts = coexisting(cue, &self.texts);
        self.analyzer.decide(faces.into_iter().chain(texts))
    }

    /// Style every cue in the track, in place and in order.
    ///
    /// Overwrites any prior style; count, order, times and text are
    /// preserved. Re-running on an already-styled track with the same
    /// timelines yields the same result.
    pub fn style_track(&self, cues: &mut [Cue]) {
        let mut shifted = 0usize;
        for cue in cues.iter_mut() {
            let directive = self.directive_for(cue);
            if directive != ShiftDirective::RemainCenter {
                shifted += 1;
            }
            cue.style = directive.style_string().to_string();
        }
        info!(cues = cues.len(), shifted, "Styled cue track");
    }
}
