use std::fmt::{self, Write as _};

use crate::runtime::{ADD_TO_CELL, IS_CURRENT_ZERO, MOVE_CURSOR, READ_CELL, WRITE_CELL};

/// Default number of spaces per nesting level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Widest indentation accepted per nesting level.
pub const MAX_INDENT_WIDTH: usize = 16;

/// One line of emitted JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    AddToCell(i64),
    MoveCursor(i64),
    WriteCell,
    ReadCell,
    LoopOpen,
    LoopClose,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::AddToCell(delta) => write!(f, "{ADD_TO_CELL}({delta});"),
            Statement::MoveCursor(delta) => write!(f, "{MOVE_CURSOR}({delta});"),
            Statement::WriteCell => write!(f, "await {WRITE_CELL}();"),
            Statement::ReadCell => write!(f, "await {READ_CELL}();"),
            Statement::LoopOpen => write!(f, "while (!{IS_CURRENT_ZERO}()) {{"),
            Statement::LoopClose => write!(f, "}}"),
        }
    }
}

/// Appends indented statements to a growing text body.
#[derive(Debug)]
pub struct Emitter {
    body: String,
    indent_width: usize,
    statements: usize,
}

impl Emitter {
    /// `indent_width` is clamped to [`MAX_INDENT_WIDTH`].
    pub fn new(indent_width: usize) -> Self {
        Self {
            body: String::new(),
            indent_width: indent_width.min(MAX_INDENT_WIDTH),
            statements: 0,
        }
    }

    /// Append `stmt` on its own line, indented `depth` levels.
    pub fn emit(&mut self, depth: usize, stmt: Statement) {
        // Padding is pushed directly: format widths are capped at u16::MAX.
        let pad = depth.saturating_mul(self.indent_width);
        self.body.extend(std::iter::repeat_n(' ', pad));
        // Writing into a String cannot fail.
        let _ = writeln!(self.body, "{stmt}");
        self.statements += 1;
    }

    /// Number of statements emitted so far.
    pub fn statements(&self) -> usize {
        self.statements
    }

    pub fn finish(self) -> String {
        self.body
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_WIDTH)
    }
}
