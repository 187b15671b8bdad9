//! Single-pass Brainfuck to JavaScript translation.
//!
//! Runs of `+`/`-` and runs of `>`/`<` each collapse into one statement.
//! Before any instruction outside a class is emitted, that class's pending
//! delta is flushed: the value delta first, then the pointer delta. This keeps
//! every observable effect (`.`, `,`, loop tests) in source order.
//!
//! Deltas still pending at end of input are dropped. Nothing after them can
//! observe the tape, so the program's output is unchanged.

use tracing::{debug, trace};

use crate::delta::DeltaTracker;
use crate::emit::{DEFAULT_INDENT_WIDTH, Emitter, Statement};
use crate::instruction::{Instruction, instructions};

/// Indentation level of the body inside the runtime's async block.
pub const BASE_DEPTH: usize = 1;

/// Translates one program. Create a fresh one per source.
#[derive(Debug)]
pub struct Translator {
    deltas: DeltaTracker,
    depth: usize,
    emitter: Emitter,
}

impl Translator {
    pub fn new(indent_width: usize) -> Self {
        Self {
            deltas: DeltaTracker::new(),
            depth: BASE_DEPTH,
            emitter: Emitter::new(indent_width),
        }
    }

    /// Current loop nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Process one instruction.
    pub fn step(&mut self, instr: Instruction) {
        trace!(symbol = %instr.symbol(), depth = self.depth, "step");
        if !instr.is_cell_arithmetic() {
            if let Some(delta) = self.deltas.take_value() {
                trace!(delta, depth = self.depth, "flush value delta");
                self.emitter.emit(self.depth, Statement::AddToCell(delta));
            }
        }
        if !instr.is_pointer_move() {
            if let Some(delta) = self.deltas.take_pointer() {
                trace!(delta, depth = self.depth, "flush pointer delta");
                self.emitter.emit(self.depth, Statement::MoveCursor(delta));
            }
        }

        match instr {
            Instruction::Increment
            | Instruction::Decrement
            | Instruction::MoveRight
            | Instruction::MoveLeft => {
                self.deltas.accumulate(instr);
            }
            Instruction::Write => self.emitter.emit(self.depth, Statement::WriteCell),
            Instruction::Read => self.emitter.emit(self.depth, Statement::ReadCell),
            Instruction::LoopStart => {
                self.emitter.emit(self.depth, Statement::LoopOpen);
                self.depth += 1;
            }
            Instruction::LoopEnd => {
                // Validated input never closes below the base depth.
                self.depth = self.depth.saturating_sub(1);
                self.emitter.emit(self.depth, Statement::LoopClose);
            }
        }
    }

    /// Finish translation and return the statement body.
    pub fn finish(self) -> String {
        if !self.deltas.is_empty() {
            debug!(
                pointer = self.deltas.pointer(),
                value = self.deltas.value(),
                "dropping trailing deltas"
            );
        }
        debug!(statements = self.emitter.statements(), "translation finished");
        self.emitter.finish()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_WIDTH)
    }
}

/// Translate `source` into a JavaScript statement body using the default
/// indentation.
///
/// `source` must already have passed [`crate::validate`]; unbalanced input
/// produces unbalanced braces but never panics.
pub fn translate(source: &[u8]) -> String {
    translate_with_indent(source, DEFAULT_INDENT_WIDTH)
}

/// Like [`translate`], with `indent_width` spaces per nesting level.
pub fn translate_with_indent(source: &[u8], indent_width: usize) -> String {
    let mut translator = Translator::new(indent_width);
    let mut count = 0usize;
    for instr in instructions(source) {
        translator.step(instr);
        count += 1;
    }
    debug!(instructions = count, "translated source");
    translator.finish()
}
