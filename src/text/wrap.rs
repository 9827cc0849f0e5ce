//! Greedy line breaking driven by measured widths.

/// Anything that can report the rendered extent of a single line.
pub trait MeasureText {
    /// `(width, height)` in pixels of `text` set at `font_size`.
    fn measure(&mut self, text: &str, font_size: f32) -> (f64, f64);
}

/// How a text was broken into lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
    /// Break at spaces.
    Words,
    /// Break between any two characters (scripts written without spaces).
    Chars,
}

/// Lines produced by [`wrap_text`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct WrappedText {
    /// Lines in reading order.
    pub lines: Vec<String>,
    /// Strategy that produced them.
    pub mode: WrapMode,
}

/// Collapse every whitespace run to one space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Wrap `text` to `max_width`.
///
/// Text containing a space wraps word by word; a word wider than `max_width` still gets a line
/// of its own. Text without spaces wraps character by character, and a single character always
/// fits on an empty line.
pub fn wrap_text<M: MeasureText + ?Sized>(
    measurer: &mut M,
    text: &str,
    font_size: f32,
    max_width: f64,
) -> WrappedText {
    let text = collapse_whitespace(text);
    if text.contains(' ') {
        WrappedText {
            lines: wrap_units(measurer, text.split(' '), " ", font_size, max_width),
            mode: WrapMode::Words,
        }
    } else {
        let chars: Vec<String> = text.chars().map(String::from).collect();
        WrappedText {
            lines: wrap_units(
                measurer,
                chars.iter().map(String::as_str),
                "",
                font_size,
                max_width,
            ),
            mode: WrapMode::Chars,
        }
    }
}

fn wrap_units<'a, M: MeasureText + ?Sized>(
    measurer: &mut M,
    units: impl Iterator<Item = &'a str>,
    joiner: &str,
    font_size: f32,
    max_width: f64,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for unit in units {
        if current.is_empty() {
            current.push_str(unit);
            continue;
        }
        let candidate = format!("{current}{joiner}{unit}");
        if measurer.measure(&candidate, font_size).0 <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, unit.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
