// MIDI Fixtures - Library exports for tests and the generator binary

pub mod generator;
pub mod midi;
pub mod sequencer;

// Re-export commonly used types for convenience
pub use generator::{FIXTURE_CONFIGS, FixtureConfig, GeneratorError, generate_all};
pub use midi::writer::{WriteError, write_track};
pub use sequencer::{
    EventKind, PatternError, TICKS_PER_QUARTER, Tempo, TimeSignature, Track, TrackEvent,
    build_bass_track, build_drum_track,
};
