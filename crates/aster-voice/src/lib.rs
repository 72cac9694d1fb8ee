//! Filler-audio assets for Aster voice playback.
//!
//! Loads the bundled filler-voice PCM frames into an owned table once at
//! startup. Playback consumers receive the table by reference; an empty
//! table is a valid state they must tolerate.

pub mod filler_audio;

pub use filler_audio::FillerAudioTable;
