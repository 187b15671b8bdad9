//! Bracket balance checking.
//!
//! Brainfuck has a single bracket pair, so a running open-count is enough;
//! no stack is needed.

use tracing::debug;

use crate::error::ValidationError;
use crate::instruction::Instruction;

/// Check that every `]` closes an already-open `[` and that nothing is left
/// open at the end of `source`. All other bytes are ignored.
pub fn validate(source: &[u8]) -> Result<(), ValidationError> {
    let mut open: usize = 0;
    // Where the open-count last rose from 0 to 1, i.e. the outermost open loop.
    let mut outermost: usize = 0;

    for (offset, &byte) in source.iter().enumerate() {
        match Instruction::classify(byte) {
            Some(Instruction::LoopStart) => {
                if open == 0 {
                    outermost = offset;
                }
                open += 1;
            }
            Some(Instruction::LoopEnd) => {
                let Some(remaining) = open.checked_sub(1) else {
                    return Err(ValidationError::UnbalancedClose { offset });
                };
                open = remaining;
            }
            _ => {}
        }
    }

    if open > 0 {
        return Err(ValidationError::UnbalancedOpen {
            offset: outermost,
            open,
        });
    }

    debug!(bytes = source.len(), "bracket check passed");
    Ok(())
}
