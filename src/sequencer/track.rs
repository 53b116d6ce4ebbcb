// Track - ordered, delta-timed MIDI event sequence
// Deltas are in ticks relative to the previous event on the same track

use crate::sequencer::timeline::{Tempo, TimeSignature};

/// What happens at one point in a track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Start sounding a pitch on a channel
    NoteOn { channel: u8, pitch: u8, velocity: u8 },
    /// Stop sounding a pitch on a channel (released with velocity 0)
    NoteOff { channel: u8, pitch: u8 },
    /// Tempo meta event, microseconds per quarter note
    Tempo { microseconds_per_beat: u32 },
    /// Time-signature meta event
    TimeSignature { numerator: u8, denominator: u8 },
}

/// A single event, `delta` ticks after the previous event on the track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackEvent {
    pub delta: u32,
    pub kind: EventKind,
}

/// An ordered sequence of delta-timed events sharing one tempo and one
/// time signature
///
/// Insertion order is significant: the sum of deltas from the start of the
/// track to an event is that event's absolute tick position, so reordering
/// events changes musical meaning. Tracks are built once, serialized, and
/// discarded; nothing mutates a track after it is written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    events: Vec<TrackEvent>,
}

impl Track {
    /// Creates a track opening with its tempo and time-signature meta events
    pub fn new(tempo: Tempo, time_signature: TimeSignature) -> Self {
        let mut track = Self { events: Vec::new() };
        track.push(
            0,
            EventKind::Tempo {
                microseconds_per_beat: tempo.microseconds_per_beat(),
            },
        );
        track.push(
            0,
            EventKind::TimeSignature {
                numerator: time_signature.numerator,
                denominator: time_signature.denominator,
            },
        );
        track
    }

    /// Append an event `delta` ticks after the previous one
    pub fn push(&mut self, delta: u32, kind: EventKind) {
        self.events.push(TrackEvent { delta, kind });
    }

    /// Append a note-on event
    pub fn note_on(&mut self, delta: u32, channel: u8, pitch: u8, velocity: u8) {
        assert!(channel <= 15, "MIDI channel must be 0-15");
        assert!(pitch <= 127, "MIDI pitch must be 0-127");
        assert!(velocity <= 127, "MIDI velocity must be 0-127");
        self.push(
            delta,
            EventKind::NoteOn {
                channel,
                pitch,
                velocity,
            },
        );
    }

    /// Append a note-off event
    pub fn note_off(&mut self, delta: u32, channel: u8, pitch: u8) {
        assert!(channel <= 15, "MIDI channel must be 0-15");
        assert!(pitch <= 127, "MIDI pitch must be 0-127");
        self.push(delta, EventKind::NoteOff { channel, pitch });
    }

    /// Get all events in insertion order
    pub fn events(&self) -> &[TrackEvent] {
        &self.events
    }

    /// Get the number of events
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Total track length in ticks (sum of all deltas)
    pub fn total_ticks(&self) -> u64 {
        self.events.iter().map(|e| u64::from(e.delta)).sum()
    }

    /// Count note-on events for a given pitch across all channels
    pub fn note_on_count(&self, pitch: u8) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, EventKind::NoteOn { pitch: p, .. } if p == pitch))
            .count()
    }
}
