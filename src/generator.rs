// Fixture generator - expands the fixed configuration table into .mid files

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::midi::writer::{self, WriteError};
use crate::sequencer::pattern::{self, PatternError};

/// Generator error types
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One (tempo, bar count) fixture configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Tempo in beats per minute
    pub tempo: u32,
    /// Track length in 4/4 bars
    pub bars: u32,
}

impl FixtureConfig {
    pub const fn new(tempo: u32, bars: u32) -> Self {
        Self { tempo, bars }
    }

    /// Deterministic file name for one instrument,
    /// e.g. `bass_120bpm_4bars.mid`
    pub fn file_name(&self, instrument: &str) -> String {
        format!("{}_{}bpm_{}bars.mid", instrument, self.tempo, self.bars)
    }
}

/// The fixed configurations exercised by the playback plugin's test suite
pub const FIXTURE_CONFIGS: [FixtureConfig; 3] = [
    FixtureConfig::new(120, 4),
    FixtureConfig::new(100, 8),
    FixtureConfig::new(140, 2),
];

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "test_midi_files";

/// Generate one bass and one drum file per configuration into `output_dir`,
/// creating the directory if needed
///
/// Files are written sequentially and independently; the first failure
/// aborts the run and is returned to the caller. Returns the written paths
/// in generation order.
pub fn generate_all(output_dir: &Path) -> Result<Vec<PathBuf>, GeneratorError> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(FIXTURE_CONFIGS.len() * 2);
    for config in FIXTURE_CONFIGS {
        let bass = pattern::build_bass_track(config.tempo, config.bars)?;
        let bass_path = output_dir.join(config.file_name("bass"));
        writer::write_track(&bass, &bass_path)?;
        written.push(bass_path);

        let drums = pattern::build_drum_track(config.tempo, config.bars)?;
        let drum_path = output_dir.join(config.file_name("drum"));
        writer::write_track(&drums, &drum_path)?;
        written.push(drum_path);
    }

    Ok(written)
}
