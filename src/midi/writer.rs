// Standard MIDI File writer
// Maps domain track events onto midly and saves single-track (format 0) files

use std::path::Path;

use midly::num::u15;
use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEventKind};

use crate::sequencer::timeline::{TICKS_PER_QUARTER, TimeSignature};
use crate::sequencer::track::{EventKind, Track};

/// Writer error types
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// SMF defaults for the time-signature meta event: 24 MIDI clocks per
// metronome click, 8 thirty-second notes per quarter note
const CLOCKS_PER_CLICK: u8 = 24;
const THIRTY_SECONDS_PER_QUARTER: u8 = 8;

fn to_smf_kind(kind: EventKind) -> TrackEventKind<'static> {
    match kind {
        EventKind::NoteOn {
            channel,
            pitch,
            velocity,
        } => TrackEventKind::Midi {
            channel: channel.into(),
            message: MidiMessage::NoteOn {
                key: pitch.into(),
                vel: velocity.into(),
            },
        },
        // Real note-off status, released with velocity 0
        EventKind::NoteOff { channel, pitch } => TrackEventKind::Midi {
            channel: channel.into(),
            message: MidiMessage::NoteOff {
                key: pitch.into(),
                vel: 0.into(),
            },
        },
        EventKind::Tempo {
            microseconds_per_beat,
        } => TrackEventKind::Meta(MetaMessage::Tempo(microseconds_per_beat.into())),
        EventKind::TimeSignature {
            numerator,
            denominator,
        } => TrackEventKind::Meta(MetaMessage::TimeSignature(
            numerator,
            TimeSignature::new(numerator, denominator).denominator_exponent(),
            CLOCKS_PER_CLICK,
            THIRTY_SECONDS_PER_QUARTER,
        )),
    }
}

/// Convert a track into SMF events, appending the mandatory End Of Track
fn to_smf_events(track: &Track) -> Vec<midly::TrackEvent<'static>> {
    let mut events = Vec::with_capacity(track.event_count() + 1);
    for event in track.events() {
        events.push(midly::TrackEvent {
            delta: event.delta.into(),
            kind: to_smf_kind(event.kind),
        });
    }
    events.push(midly::TrackEvent {
        delta: 0.into(),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });
    events
}

/// Write a track to `path` as a single-track Standard MIDI File with
/// metrical timing at `TICKS_PER_QUARTER` pulses per quarter note
pub fn write_track(track: &Track, path: &Path) -> Result<(), WriteError> {
    let header = Header::new(
        Format::SingleTrack,
        Timing::Metrical(u15::from(TICKS_PER_QUARTER)),
    );
    let mut smf = Smf::new(header);
    smf.tracks.push(to_smf_events(track));
    smf.save(path)?;
    Ok(())
}
