use std::io::{self, IsTerminal, Write};

use nu_ansi_term::Style;

use crate::error::{Bf2JsError, ValidationError};
use crate::theme::catppuccin::Mocha;

/// Bytes shown either side of the offending position.
const WINDOW_BYTES: usize = 32;

/// Print a one-line diagnostic for `err`, prefixed with the program name.
/// The label is coloured only when stderr is a terminal.
pub fn print_error(program: &str, err: &Bf2JsError) {
    let color = io::stderr().is_terminal();
    let label = match err {
        Bf2JsError::Validation(_) => "Parse error",
        _ => "error",
    };
    let label = if color {
        Style::new().bold().fg(Mocha::RED).paint(label).to_string()
    } else {
        label.to_string()
    };
    eprintln!("{program}: {label}: {err}");
    let _ = io::stderr().flush();
}

/// Print the source around a validation error with a caret under the bracket.
pub fn print_error_with_context(source: &[u8], err: &ValidationError) {
    let (snippet, caret) = render_context(source, err.offset());
    if io::stderr().is_terminal() {
        eprintln!("  {}", Mocha::TEXT.paint(snippet));
        eprintln!("  {}", Mocha::YELLOW.paint(caret));
        eprintln!("  {}", Mocha::SURFACE2.paint(format!("unmatched {}", err.kind())));
    } else {
        eprintln!("  {snippet}");
        eprintln!("  {caret}");
    }
    let _ = io::stderr().flush();
}

/// Render a window of `source` around `pos` and a caret line pointing at it.
/// Non-printable bytes are shown as `.` so every byte occupies one column.
pub fn render_context(source: &[u8], pos: usize) -> (String, String) {
    let start = pos.saturating_sub(WINDOW_BYTES);
    let end = (pos + WINDOW_BYTES + 1).min(source.len());
    let start = start.min(end);

    let snippet: String = source[start..end]
        .iter()
        .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
        .collect();

    let mut caret = " ".repeat(pos.saturating_sub(start));
    caret.push('^');
    (snippet, caret)
}
