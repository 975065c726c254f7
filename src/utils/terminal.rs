//! Sanitizing catalog text before it reaches the terminal
//!
//! Titles and descriptions come from the backend and may carry escape sequences. Printing
//! them raw could move the cursor, recolor the screen or ring the bell, so everything shown
//! by the CLI and the TUI passes through here first.

/// Remove CSI escape sequences and control characters, keeping tab and line breaks
///
/// ```
/// use case_search::utils::strip_control_sequences;
///
/// assert_eq!(strip_control_sequences("\x1b[1mBreach\x1b[0m"), "Breach");
/// ```
pub fn strip_control_sequences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\x1b' => {
                // ESC [ params final-byte; a lone ESC is dropped
                let mut rest = chars.clone();
                if rest.next() == Some('[') {
                    chars = rest;
                    for next in chars.by_ref() {
                        if next.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
            }
            '\t' | '\n' | '\r' => out.push(ch),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }

    out
}

/// Sanitize and fold onto one line, for list rows and tab-separated output
pub fn sanitize_line(text: &str) -> String {
    strip_control_sequences(text).split_whitespace().collect::<Vec<_>>().join(" ")
}
