/// One recognized Brainfuck instruction.
///
/// Bytes outside the eight-symbol alphabet `+-><.,[]` are commentary and
/// never become an `Instruction`; see [`Instruction::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `+`
    Increment,
    /// `-`
    Decrement,
    /// `>`
    MoveRight,
    /// `<`
    MoveLeft,
    /// `.`
    Write,
    /// `,`
    Read,
    /// `[`
    LoopStart,
    /// `]`
    LoopEnd,
}

impl Instruction {
    /// Classify a source byte. Returns `None` for comment bytes.
    pub fn classify(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(Instruction::Increment),
            b'-' => Some(Instruction::Decrement),
            b'>' => Some(Instruction::MoveRight),
            b'<' => Some(Instruction::MoveLeft),
            b'.' => Some(Instruction::Write),
            b',' => Some(Instruction::Read),
            b'[' => Some(Instruction::LoopStart),
            b']' => Some(Instruction::LoopEnd),
            _ => None,
        }
    }

    /// `+` or `-`
    pub fn is_cell_arithmetic(self) -> bool {
        matches!(self, Instruction::Increment | Instruction::Decrement)
    }

    /// `>` or `<`
    pub fn is_pointer_move(self) -> bool {
        matches!(self, Instruction::MoveRight | Instruction::MoveLeft)
    }

    pub fn symbol(self) -> char {
        match self {
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::MoveRight => '>',
            Instruction::MoveLeft => '<',
            Instruction::Write => '.',
            Instruction::Read => ',',
            Instruction::LoopStart => '[',
            Instruction::LoopEnd => ']',
        }
    }
}

/// Iterate over the instructions of `source`, skipping commentary.
pub fn instructions(source: &[u8]) -> impl Iterator<Item = Instruction> + '_ {
    source.iter().copied().filter_map(Instruction::classify)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_round_trips_every_symbol() {
        for &b in b"+-><.,[]" {
            let instr = Instruction::classify(b).expect("instruction byte");
            assert_eq!(instr.symbol() as u8, b);
        }
    }

    #[test]
    fn comment_bytes_are_ignored() {
        for &b in b"hello world\n\t0123 #!" {
            assert!(Instruction::classify(b).is_none());
        }
        assert!(Instruction::classify(0xFF).is_none());
    }

    #[test]
    fn instructions_skips_commentary() {
        let got: Vec<_> = instructions(b"a+b[c]d").collect();
        assert_eq!(
            got,
            vec![Instruction::Increment, Instruction::LoopStart, Instruction::LoopEnd]
        );
    }

    #[test]
    fn class_predicates() {
        assert!(Instruction::Increment.is_cell_arithmetic());
        assert!(Instruction::Decrement.is_cell_arithmetic());
        assert!(!Instruction::MoveLeft.is_cell_arithmetic());
        assert!(Instruction::MoveRight.is_pointer_move());
        assert!(!Instruction::Write.is_pointer_move());
    }
}
