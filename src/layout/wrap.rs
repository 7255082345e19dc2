use crate::{LayoutError, Px};

/// The width-measurement capability handed to [`wrap_text`]: maps a candidate
/// line of text to its rendered width, in the same unit as the maximum width.
///
/// The engine treats the measurer as a pure function for the duration of one
/// call and never caches results across calls. Implemented by
/// [`SizedFont`](crate::SizedFont) and blanket-implemented for closures, so a
/// plain `|s: &str| Px(...)` works anywhere a `Measure` is expected.
pub trait Measure {
    fn width(&self, candidate: &str) -> Px;
}

impl<F> Measure for F
where
    F: Fn(&str) -> Px,
{
    fn width(&self, candidate: &str) -> Px {
        self(candidate)
    }
}

/// Wrap `text` into lines no wider than `max_width`, as measured by `measure`.
///
/// Each `'\n'` in the input starts a new paragraph and always forces a hard
/// line break, independent of width. Within a paragraph, lines are filled
/// greedily: words are taken in order and a line is emitted as soon as the next
/// word would push it past `max_width`. Words are joined by single spaces and
/// emitted lines carry no leading or trailing whitespace.
///
/// A single word wider than `max_width` is never split; it is placed alone on
/// its own line and allowed to overflow. An empty paragraph (two consecutive
/// newlines, or an empty input) yields one empty line, so blank-line spacing in
/// the input survives into the output.
///
/// Note that each candidate line is measured *with* its trailing space, and a
/// word is only rejected once the candidate including it overflows, so the last
/// word accepted onto a line may sit slightly past `max_width` under a measurer
/// that assigns the trailing space a nonzero width.
///
/// Returns [`LayoutError::InvalidMaxWidth`] if `max_width` is zero, negative,
/// or NaN. Every other input, including empty and whitespace-only text, takes
/// the normal path.
pub fn wrap_text<M: Measure>(
    measure: &M,
    text: &str,
    max_width: Px,
) -> Result<Vec<String>, LayoutError> {
    if !(max_width > Px(0.0)) {
        return Err(LayoutError::InvalidMaxWidth(max_width));
    }

    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let mut candidate = current.clone();
            candidate.push_str(word);
            candidate.push(' ');

            if measure.width(&candidate) > max_width && !current.is_empty() {
                lines.push(current.trim().to_string());
                current.clear();
                current.push_str(word);
                current.push(' ');
            } else {
                current = candidate;
            }
        }

        // last line of this paragraph; empty paragraphs yield an empty line
        lines.push(current.trim().to_string());
    }

    Ok(lines)
}

/// Split `text` on explicit newlines only, with no width-based wrapping: one
/// trimmed line per paragraph. Used for panels whose copy is already broken
/// into lines by hand.
pub fn hard_lines(text: &str) -> Vec<String> {
    text.split('\n').map(|line| line.trim().to_string()).collect()
}
