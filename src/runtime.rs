//! The JavaScript runtime every translated program runs on.
//!
//! The boilerplate below provides a circular tape of `u8` cells, a cursor,
//! and five primitives. Translated statements only ever call these:
//!
//! | primitive         | effect                                                   |
//! |-------------------|----------------------------------------------------------|
//! | `moveCursor(d)`   | add `d` to the cursor, wrapping into `[0, tape size)`    |
//! | `addToCell(d)`    | add `d` to the current cell; `Uint8Array` wraps mod 256  |
//! | `writeCell()`     | write the current cell to stdout as one raw byte         |
//! | `readCell()`      | async; read one stdin byte into the current cell, 0 on EOF |
//! | `isCurrentZero()` | true iff the current cell is 0                           |
//!
//! `writeCell` and `readCell` are the only suspension points, so statement
//! order in the body is the total order of observable effects.

/// Default number of tape cells.
pub const DEFAULT_TAPE_SIZE: usize = 30_000;

pub const MOVE_CURSOR: &str = "moveCursor";
pub const ADD_TO_CELL: &str = "addToCell";
pub const WRITE_CELL: &str = "writeCell";
pub const READ_CELL: &str = "readCell";
pub const IS_CURRENT_ZERO: &str = "isCurrentZero";

const TAPE_SIZE_SLOT: &str = "%TAPE_SIZE%";
const BODY_SLOT: &str = "%BODY%";

const TEMPLATE: &str = r#"#!/usr/bin/env node
const { stdout, stdin } = require('process');

const dataBufferSize = %TAPE_SIZE%;
const data = new Uint8Array(dataBufferSize);
let dataPosition = 0;

const readCell = (() => {
    async function* readByteGenerator() {
        for await (const chunk of stdin) {
            for (const b of Uint8Array.from(chunk)) {
                yield b;
            }
        }
    }
    const gen = readByteGenerator();
    return async () => {
        const { value, done } = await gen.next();
        data[dataPosition] = done ? 0 : value;
    };
})();
const moveCursor = (delta) => {
    dataPosition = (((dataPosition + delta) % dataBufferSize) + dataBufferSize) % dataBufferSize;
};
const writeCell = () => stdout.write(Uint8Array.of(data[dataPosition]));
const addToCell = (delta) => {
    data[dataPosition] += delta;
};
const isCurrentZero = () => data[dataPosition] === 0;

(async () => {
%BODY%})().catch(console.error);
"#;

/// Wrap a translated statement body in the runtime boilerplate.
///
/// `body` is inserted verbatim inside the async top-level block; each of its
/// lines is expected to end with `\n`.
pub fn render_program(body: &str, tape_size: usize) -> String {
    TEMPLATE
        .replacen(TAPE_SIZE_SLOT, &tape_size.to_string(), 1)
        .replacen(BODY_SLOT, body, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_defines_every_primitive() {
        for name in [MOVE_CURSOR, ADD_TO_CELL, WRITE_CELL, READ_CELL, IS_CURRENT_ZERO] {
            assert!(
                TEMPLATE.contains(&format!("const {name} = ")),
                "missing primitive {name}"
            );
        }
    }

    #[test]
    fn read_stores_zero_at_end_of_input() {
        assert!(TEMPLATE.contains("const { value, done } = await gen.next();"));
        assert!(TEMPLATE.contains("data[dataPosition] = done ? 0 : value;"));
    }

    #[test]
    fn cursor_wraps_with_full_modulo() {
        assert!(TEMPLATE.contains(
            "dataPosition = (((dataPosition + delta) % dataBufferSize) + dataBufferSize) % dataBufferSize;"
        ));
    }

    #[test]
    fn cells_are_bytes_and_written_raw() {
        assert!(TEMPLATE.contains("const data = new Uint8Array(dataBufferSize);"));
        assert!(TEMPLATE.contains("stdout.write(Uint8Array.of(data[dataPosition]))"));
        assert!(!TEMPLATE.contains("fromCharCode"));
    }

    #[test]
    fn render_fills_both_slots() {
        let js = render_program("    addToCell(1);\n", 512);
        assert!(js.starts_with("#!/usr/bin/env node\n"));
        assert!(js.contains("const dataBufferSize = 512;"));
        assert!(js.contains("(async () => {\n    addToCell(1);\n})().catch(console.error);\n"));
        assert!(!js.contains(TAPE_SIZE_SLOT));
        assert!(!js.contains(BODY_SLOT));
    }

    #[test]
    fn empty_body_closes_the_block() {
        let js = render_program("", DEFAULT_TAPE_SIZE);
        assert!(js.contains("const dataBufferSize = 30000;"));
        assert!(js.ends_with("(async () => {\n})().catch(console.error);\n"));
    }
}
