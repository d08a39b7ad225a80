use std::path::Path;

use examsplit::load_answer_key;

pub fn run(key_path: &Path, section: &str, number: u32) -> Result<(), i32> {
    let key = load_answer_key(key_path).map_err(|e| {
        eprintln!("Error reading {}: {e}", key_path.display());
        1
    })?;

    match key.get(section, number) {
        Some(letter) => {
            println!("{letter}");
            Ok(())
        }
        None => {
            eprintln!("No answer recorded for {section} question {number}");
            Err(1)
        }
    }
}
