//! Scripted input source for headless runs.
//!
//! A script is a JSON array of segments; each segment holds a set of controls
//! for a number of display frames:
//!
//! ```json
//! [
//!   { "frames": 60, "right": true },
//!   { "frames": 1, "right": true, "jump": true },
//!   { "frames": 120, "right": true, "run": true }
//! ]
//! ```
//!
//! Omitted controls are released. After the last segment the source reports
//! no input.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ControlSample, InputSource};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSegment {
    pub frames: u32,
    #[serde(flatten)]
    pub controls: ControlSample,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputScript {
    pub segments: Vec<ScriptSegment>,
}

impl InputScript {
    pub fn from_json(text: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| GameError::ScriptIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Total display frames covered by the script.
    pub fn total_frames(&self) -> u64 {
        self.segments.iter().map(|s| u64::from(s.frames)).sum()
    }
}

/// Plays an [`InputScript`] back one sample per frame.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: InputScript,
    segment: usize,
    frame_in_segment: u32,
}

impl ScriptedSource {
    pub fn new(script: InputScript) -> Self {
        Self {
            script,
            segment: 0,
            frame_in_segment: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        let mut rest = self.script.segments.iter().skip(self.segment);
        match rest.next() {
            None => true,
            Some(current) => {
                current.frames <= self.frame_in_segment && rest.all(|s| s.frames == 0)
            }
        }
    }
}

impl InputSource for ScriptedSource {
    fn sample(&mut self) -> ControlSample {
        while let Some(current) = self.script.segments.get(self.segment) {
            if self.frame_in_segment < current.frames {
                self.frame_in_segment += 1;
                return current.controls;
            }
            self.segment += 1;
            self.frame_in_segment = 0;
        }
        ControlSample::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segments_with_defaults() {
        let script =
            InputScript::from_json(r#"[{"frames": 2, "right": true}, {"frames": 1, "jump": true}]"#)
                .unwrap();
        assert_eq!(script.segments.len(), 2);
        assert_eq!(script.total_frames(), 3);
        assert!(script.segments[0].controls.right);
        assert!(!script.segments[0].controls.jump);
        assert!(script.segments[1].controls.jump);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = InputScript::from_json(r#"{"frames": "many"}"#).unwrap_err();
        assert!(matches!(err, GameError::ScriptParse(_)));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = InputScript::from_path("./no/such/script.json").unwrap_err();
        assert!(matches!(err, GameError::ScriptIo { .. }));
    }

    #[test]
    fn test_playback_follows_segments_then_stops() {
        let script =
            InputScript::from_json(r#"[{"frames": 2, "left": true}, {"frames": 0, "run": true}, {"frames": 1, "jump": true}]"#)
                .unwrap();
        let mut source = ScriptedSource::new(script);
        assert!(!source.is_finished());
        assert!(source.sample().left);
        assert!(source.sample().left);
        let s = source.sample();
        assert!(s.jump && !s.left && !s.run);
        assert!(source.is_finished());
        assert_eq!(source.sample(), ControlSample::NONE);
        assert_eq!(source.sample(), ControlSample::NONE);
    }
}
