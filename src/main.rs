use std::path::Path;

use midi_fixtures::generator::{self, DEFAULT_OUTPUT_DIR};

fn main() {
    println!("=== MIDI Fixture Generator ===");
    println!("Generating test MIDI files...\n");

    let output_dir = Path::new(DEFAULT_OUTPUT_DIR);
    let written = match generator::generate_all(output_dir) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    for path in &written {
        println!("Created: {}", path.display());
    }
    println!("\n{} files written to {}", written.len(), output_dir.display());
}
