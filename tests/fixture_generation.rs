//! End-to-end tests for fixture generation
//!
//! Generates the full fixture set into scratch directories and re-parses
//! the written files with midly to validate their structure.

use std::fs;
use std::path::Path;

use midly::{Format, MetaMessage, MidiMessage, Smf, Timing, TrackEventKind};

use midi_fixtures::generator::{FIXTURE_CONFIGS, generate_all};
use midi_fixtures::sequencer::TICKS_PER_QUARTER;

fn parse_file(path: &Path) -> (Vec<u8>, usize) {
    // Returns (note-on pitches in order, total event count) for track 0
    let bytes = fs::read(path).expect("Failed to read written file");
    let smf = Smf::parse(&bytes).expect("Written file is not valid SMF");
    assert_eq!(smf.header.format, Format::SingleTrack);
    assert_eq!(smf.header.timing, Timing::Metrical(TICKS_PER_QUARTER.into()));
    assert_eq!(smf.tracks.len(), 1);

    let pitches = smf.tracks[0]
        .iter()
        .filter_map(|event| match event.kind {
            TrackEventKind::Midi {
                message: MidiMessage::NoteOn { key, .. },
                ..
            } => Some(key.as_int()),
            _ => None,
        })
        .collect();
    (pitches, smf.tracks[0].len())
}

#[test]
fn test_generates_all_six_fixture_files() {
    let dir = tempfile::tempdir().unwrap();

    let written = generate_all(dir.path()).expect("Generation failed");
    assert_eq!(written.len(), 6);

    let expected = [
        "bass_120bpm_4bars.mid",
        "drum_120bpm_4bars.mid",
        "bass_100bpm_8bars.mid",
        "drum_100bpm_8bars.mid",
        "bass_140bpm_2bars.mid",
        "drum_140bpm_2bars.mid",
    ];
    for name in expected {
        let path = dir.path().join(name);
        assert!(path.is_file(), "Missing fixture file: {}", name);
        // The 14-byte SMF header alone is bigger than an empty file
        assert!(fs::metadata(&path).unwrap().len() > 14);
    }
}

#[test]
fn test_written_files_parse_with_expected_structure() {
    let dir = tempfile::tempdir().unwrap();
    generate_all(dir.path()).expect("Generation failed");

    for config in FIXTURE_CONFIGS {
        let bars = config.bars as usize;

        // Bass: 4 note pairs per bar plus 2 metas and End Of Track
        let (bass_pitches, bass_events) =
            parse_file(&dir.path().join(config.file_name("bass")));
        assert_eq!(bass_pitches.len(), 4 * bars);
        assert_eq!(bass_events, 2 + 8 * bars + 1);
        for (i, pitch) in bass_pitches.iter().enumerate() {
            assert_eq!(*pitch, [36, 41, 43, 36][i % 4]);
        }

        // Drums: per bar 2 kicks, 2 snares, 8 hi-hats, minus the final
        // bar's trailing off-beat hi-hat
        let (drum_pitches, _) = parse_file(&dir.path().join(config.file_name("drum")));
        let kicks = drum_pitches.iter().filter(|&&p| p == 36).count();
        let snares = drum_pitches.iter().filter(|&&p| p == 38).count();
        let hihats = drum_pitches.iter().filter(|&&p| p == 42).count();
        assert_eq!(kicks, 2 * bars);
        assert_eq!(snares, 2 * bars);
        assert_eq!(hihats, 8 * bars - 1);
    }
}

#[test]
fn test_tempo_meta_matches_configuration() {
    let dir = tempfile::tempdir().unwrap();
    generate_all(dir.path()).expect("Generation failed");

    for config in FIXTURE_CONFIGS {
        for instrument in ["bass", "drum"] {
            let bytes = fs::read(dir.path().join(config.file_name(instrument))).unwrap();
            let smf = Smf::parse(&bytes).unwrap();

            let first = &smf.tracks[0][0];
            match first.kind {
                TrackEventKind::Meta(MetaMessage::Tempo(micros)) => {
                    assert_eq!(micros.as_int(), 60_000_000 / config.tempo);
                }
                _ => panic!("First event must be the tempo meta"),
            }
            let second = &smf.tracks[0][1];
            assert_eq!(
                second.kind,
                TrackEventKind::Meta(MetaMessage::TimeSignature(4, 2, 24, 8))
            );
        }
    }
}

#[test]
fn test_generation_is_byte_identical_across_runs() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    let written_first = generate_all(first.path()).expect("First run failed");
    let written_second = generate_all(second.path()).expect("Second run failed");

    for (a, b) in written_first.iter().zip(&written_second) {
        assert_eq!(a.file_name(), b.file_name());
        assert_eq!(
            fs::read(a).unwrap(),
            fs::read(b).unwrap(),
            "Fixture {:?} differs between runs",
            a.file_name()
        );
    }
}

#[test]
fn test_regenerating_into_same_directory_overwrites() {
    let dir = tempfile::tempdir().unwrap();

    generate_all(dir.path()).expect("First run failed");
    let before = fs::read(dir.path().join("bass_120bpm_4bars.mid")).unwrap();

    generate_all(dir.path()).expect("Second run failed");
    let after = fs::read(dir.path().join("bass_120bpm_4bars.mid")).unwrap();

    assert_eq!(before, after);
}
