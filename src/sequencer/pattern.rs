// Fixture patterns - bass line and drum groove builders
// Expands a compact (tempo, bars) configuration into a delta-timed track

use thiserror::Error;

use crate::sequencer::timeline::{TICKS_PER_QUARTER, Tempo, TimeSignature};
use crate::sequencer::track::Track;

/// Pattern builder error types
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// MIDI channel carrying the bass line
pub const BASS_CHANNEL: u8 = 0;

/// General MIDI percussion channel
pub const DRUM_CHANNEL: u8 = 9;

// C2, F2, G2, C2 - the repeating bass cycle, one note per beat
const BASS_PITCHES: [u8; 4] = [36, 41, 43, 36];
const BASS_VELOCITY: u8 = 80;

// General MIDI percussion map
const KICK: u8 = 36; // Bass Drum 1
const SNARE: u8 = 38; // Acoustic Snare
const CLOSED_HIHAT: u8 = 42;

const KICK_VELOCITY: u8 = 100;
const SNARE_VELOCITY: u8 = 90;
const HIHAT_DOWNBEAT_VELOCITY: u8 = 60;
const HIHAT_OFFBEAT_VELOCITY: u8 = 40;

// Backbeat: kick on beats 1 and 3, snare on beats 2 and 4
const BACKBEAT: [(u8, u8); 4] = [
    (KICK, KICK_VELOCITY),
    (SNARE, SNARE_VELOCITY),
    (KICK, KICK_VELOCITY),
    (SNARE, SNARE_VELOCITY),
];

// The SMF tempo meta event stores microseconds per beat in 24 bits
const MAX_MICROSECONDS_PER_BEAT: u32 = 0xFF_FFFF;

fn validate(tempo: u32, bars: u32) -> Result<Tempo, PatternError> {
    if tempo == 0 {
        return Err(PatternError::InvalidParameter(
            "tempo must be a positive BPM value".to_string(),
        ));
    }
    if bars == 0 {
        return Err(PatternError::InvalidParameter(
            "bar count must be positive".to_string(),
        ));
    }
    let tempo = Tempo::new(tempo);
    if tempo.microseconds_per_beat() > MAX_MICROSECONDS_PER_BEAT {
        return Err(PatternError::InvalidParameter(format!(
            "tempo {} is too slow for the MIDI tempo field (minimum 4 BPM)",
            tempo
        )));
    }
    Ok(tempo)
}

/// Build the bass fixture track: `bars` bars of the C2/F2/G2/C2 cycle in
/// 4/4, one quarter note per beat
///
/// Each note is a note-on at the running cursor position followed by its
/// note-off exactly one beat later, so 4 notes consume a bar and the track
/// lasts `bars * 4` beats.
pub fn build_bass_track(tempo: u32, bars: u32) -> Result<Track, PatternError> {
    let tempo = validate(tempo, bars)?;
    let mut track = Track::new(tempo, TimeSignature::four_four());

    let beat = u32::from(TICKS_PER_QUARTER);
    for _bar in 0..bars {
        for pitch in BASS_PITCHES {
            track.note_on(0, BASS_CHANNEL, pitch, BASS_VELOCITY);
            track.note_off(beat, BASS_CHANNEL, pitch);
        }
    }

    Ok(track)
}

/// Build the drum fixture track: `bars` bars of a backbeat groove in 4/4
///
/// Every beat splits into two eighth-note slots. The downbeat carries the
/// backbeat drum (kick or snare) together with a closed hi-hat, the off-beat
/// carries a quieter hi-hat alone. Among simultaneous events the backbeat
/// drum is always emitted before the hi-hat so output is byte-stable.
///
/// The off-beat hi-hat after beat 4 of the final bar is omitted, so the
/// track ends exactly at the last snare/hi-hat release instead of running an
/// extra eighth note. Quirk of the reference fixtures, kept as-is.
pub fn build_drum_track(tempo: u32, bars: u32) -> Result<Track, PatternError> {
    let tempo = validate(tempo, bars)?;
    let mut track = Track::new(tempo, TimeSignature::four_four());

    let eighth = u32::from(TICKS_PER_QUARTER) / 2;
    for bar in 0..bars {
        let last_bar = bar + 1 == bars;

        for (beat, (drum, velocity)) in BACKBEAT.into_iter().enumerate() {
            // Downbeat: backbeat drum plus hi-hat, one eighth note long
            track.note_on(0, DRUM_CHANNEL, drum, velocity);
            track.note_on(0, DRUM_CHANNEL, CLOSED_HIHAT, HIHAT_DOWNBEAT_VELOCITY);
            track.note_off(eighth, DRUM_CHANNEL, drum);
            track.note_off(0, DRUM_CHANNEL, CLOSED_HIHAT);

            // Off-beat hi-hat, suppressed after beat 4 of the last bar
            if !(last_bar && beat == 3) {
                track.note_on(0, DRUM_CHANNEL, CLOSED_HIHAT, HIHAT_OFFBEAT_VELOCITY);
                track.note_off(eighth, DRUM_CHANNEL, CLOSED_HIHAT);
            }
        }
    }

    Ok(track)
}
