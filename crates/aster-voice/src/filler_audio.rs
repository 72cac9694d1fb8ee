use std::path::Path;

use tracing::{debug, warn};

/// In-memory table of filler-voice PCM frames, read-only after load.
///
/// Loading is best-effort: any read or parse failure logs and yields the
/// empty table, which downstream playback treats as "no filler audio".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillerAudioTable {
    frames: Vec<Vec<i32>>,
}

impl FillerAudioTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the bundled JSON asset of PCM frames from `path`.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to read filler audio asset");
                return Self::empty();
            }
        };
        match serde_json::from_str::<Vec<Vec<i32>>>(&raw) {
            Ok(frames) => {
                debug!(frames = frames.len(), "loaded filler audio table");
                Self { frames }
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to parse filler audio asset");
                Self::empty()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[Vec<i32>] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&[i32]> {
        self.frames.get(index).map(Vec::as_slice)
    }
}
