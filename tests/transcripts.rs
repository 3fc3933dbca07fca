use std::fs;

use quadcalc::shell::{Response, Shell};
use walkdir::WalkDir;

#[test]
fn transcripts_replay_exactly() {
    let shell = Shell::new();
    let mut count = 0;

    for entry in
        WalkDir::new("tests/transcripts").into_iter()
                                         .filter_map(Result::ok)
                                         .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (input, expected) in extract_cases(&content) {
            count += 1;

            let rendered = match shell.process_line(&input) {
                Response::Message(text) => text,
                Response::Empty => String::new(),
                Response::Quit => panic!("Unexpected quit for {input:?} in {path:?}"),
            };

            assert_eq!(rendered, expected, "Transcript {path:?} diverged on {input:?}");
        }
    }

    assert!(count > 0, "No transcript cases found in tests/transcripts");
}

/// Splits a transcript into `(input, expected output)` pairs.
///
/// Input lines start with `>`; the lines up to the next input line are the
/// expected output for that input.
fn extract_cases(content: &str) -> Vec<(String, String)> {
    let mut cases: Vec<(String, String)> = Vec::new();

    for line in content.lines() {
        if let Some(input) = line.strip_prefix('>') {
            cases.push((input.trim_start().to_string(), String::new()));
        } else if let Some((_, expected)) = cases.last_mut() {
            if !expected.is_empty() {
                expected.push('\n');
            }
            expected.push_str(line);
        }
    }

    cases
}
