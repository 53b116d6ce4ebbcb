// Timeline - Musical time representation
// Handles conversion between beats, bars, and MIDI tick/tempo values

use std::fmt;

/// Ticks per quarter note (PPQN - Pulses Per Quarter Note)
/// Standard MIDI resolution; all durations in this crate are integer
/// multiples or divisions of this constant.
pub const TICKS_PER_QUARTER: u16 = 480;

/// Time signature (numerator/denominator)
/// Example: 4/4 time = TimeSignature { numerator: 4, denominator: 4 }
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSignature {
    pub numerator: u8,   // Beats per bar (typically 3, 4, 5, 6, 7)
    pub denominator: u8, // Note value (4 = quarter note, 8 = eighth note)
}

impl TimeSignature {
    /// Creates a new time signature
    pub fn new(numerator: u8, denominator: u8) -> Self {
        assert!(numerator > 0, "Time signature numerator must be > 0");
        assert!(
            denominator.is_power_of_two(),
            "Time signature denominator must be power of 2"
        );
        Self {
            numerator,
            denominator,
        }
    }

    /// Common 4/4 time signature
    pub fn four_four() -> Self {
        Self::new(4, 4)
    }

    /// Denominator as the power-of-two exponent used by the MIDI
    /// time-signature meta event (4 -> 2, 8 -> 3, ...)
    pub fn denominator_exponent(&self) -> u8 {
        self.denominator.trailing_zeros() as u8
    }
}

/// Tempo in BPM (Beats Per Minute)
///
/// Stored as a whole number of beats per minute; the fixture patterns only
/// ever need integer tempos, and the MIDI tempo meta event is derived from
/// it with integer arithmetic so output stays byte-deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tempo {
    bpm: u32,
}

impl Tempo {
    /// Creates a new tempo
    /// BPM must be > 0
    pub fn new(bpm: u32) -> Self {
        assert!(bpm > 0, "BPM must be > 0");
        Self { bpm }
    }

    /// Duration of one beat in microseconds, as carried by the MIDI
    /// tempo meta event (120 BPM -> 500_000)
    pub fn microseconds_per_beat(&self) -> u32 {
        60_000_000 / self.bpm
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} BPM", self.bpm)
    }
}
