//! Extraction of translation-call arguments from raw source text.
//!
//! The scanner splits on the call marker and, per segment, counts every
//! parenthesis of either kind; the `)` that makes the count even terminates
//! the argument. Known limitation kept for compatibility with existing
//! registries: open/close correspondence is never validated, so a
//! parenthesis inside a string literal truncates the argument.

/// Call marker preceding every translation argument.
pub const CALL_MARKER: &str = "__i18n";

/// Extract the raw argument text of every completed call-marker occurrence,
/// in source order. Duplicates are kept; a segment without parentheses
/// contributes nothing.
pub fn extract_usages(text: &str) -> Vec<String> {
    let mut usages = Vec::new();

    let mut segments = text.split(CALL_MARKER);
    segments.next(); // text before the first marker

    for segment in segments {
        let mut count = 0usize;
        for (index, ch) in segment.char_indices() {
            match ch {
                '(' => count += 1,
                ')' => {
                    count += 1;
                    if count % 2 == 0 {
                        // Argument runs from after the segment's first
                        // character (the opening delimiter) to the
                        // terminator, both exclusive.
                        let start = segment.chars().next().map_or(0, char::len_utf8);
                        usages.push(segment[start..index].to_string());
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    usages
}
