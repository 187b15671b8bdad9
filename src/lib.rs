//! A Brainfuck to JavaScript translator.
//!
//! `bf2js` turns a Brainfuck program into a standalone Node.js script that
//! reproduces its reads, writes and tape mutations.
//!
//! Features and behaviors:
//! - Bytes outside `+-><.,[]` are comments and are skipped.
//! - Brackets are validated before translation; an unmatched `]` or an
//!   unclosed `[` is reported with its byte offset.
//! - Runs of `+`/`-` and of `>`/`<` collapse into a single statement each.
//! - The emitted tape is circular (30,000 cells by default) with `u8` cells.
//! - Input `,` stores 0 in the current cell once stdin is exhausted.
//! - Arithmetic or moves left pending at the very end of the program are
//!   dropped, since nothing can observe them.
//!
//! Quick start:
//!
//! ```
//! use bf2js::{Settings, compile, translate, validate};
//!
//! let code = b"++>,.";
//! validate(code).expect("brackets are balanced");
//! assert_eq!(
//!     translate(code),
//!     "    addToCell(2);\n    moveCursor(1);\n    await readCell();\n    await writeCell();\n"
//! );
//!
//! let script = compile(b"+[-]", &Settings::default()).unwrap();
//! assert!(script.starts_with("#!/usr/bin/env node"));
//! ```

pub mod cli_util;
pub mod config;
pub mod delta;
pub mod emit;
pub mod error;
pub mod instruction;
pub mod logging;
pub mod runtime;
pub mod theme;
pub mod translator;
pub mod validate;

pub use config::Settings;
pub use error::{Bf2JsError, UnmatchedBracketKind, ValidationError};
pub use instruction::Instruction;
pub use runtime::render_program;
pub use translator::{Translator, translate, translate_with_indent};
pub use validate::validate;

/// Validate `source`, translate it and wrap the body in the runtime.
pub fn compile(source: &[u8], settings: &Settings) -> Result<String, ValidationError> {
    validate(source)?;
    let body = translate_with_indent(source, settings.indent_width);
    Ok(render_program(&body, settings.tape_size))
}
