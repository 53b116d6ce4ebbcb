// Sequencer module
// Musical time representation and fixture track building

pub mod pattern;
pub mod timeline;
pub mod track;

pub use pattern::{PatternError, build_bass_track, build_drum_track};
pub use timeline::{TICKS_PER_QUARTER, Tempo, TimeSignature};
pub use track::{EventKind, Track, TrackEvent};
