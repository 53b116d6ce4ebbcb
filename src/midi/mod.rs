// MIDI module - Standard MIDI File output

pub mod writer;

pub use writer::{WriteError, write_track};
