use crate::instruction::Instruction;

/// Pending pointer and cell-value deltas accumulated during one translation.
///
/// Runs of `+`/`-` fold into `value` and runs of `>`/`<` fold into `pointer`.
/// The translator drains each counter with [`take_value`](Self::take_value) or
/// [`take_pointer`](Self::take_pointer) before emitting any instruction of a
/// different class.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeltaTracker {
    pointer: i64,
    value: i64,
}

impl DeltaTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an arithmetic or move instruction into the pending deltas.
    /// Returns `false` (and changes nothing) for every other instruction.
    pub fn accumulate(&mut self, instr: Instruction) -> bool {
        match instr {
            Instruction::Increment => self.value += 1,
            Instruction::Decrement => self.value -= 1,
            Instruction::MoveRight => self.pointer += 1,
            Instruction::MoveLeft => self.pointer -= 1,
            _ => return false,
        }
        true
    }

    /// Take the pending cell-value delta, resetting it. `None` when it is zero.
    pub fn take_value(&mut self) -> Option<i64> {
        let v = std::mem::take(&mut self.value);
        (v != 0).then_some(v)
    }

    /// Take the pending pointer delta, resetting it. `None` when it is zero.
    pub fn take_pointer(&mut self) -> Option<i64> {
        let p = std::mem::take(&mut self.pointer);
        (p != 0).then_some(p)
    }

    pub fn pointer(&self) -> i64 {
        self.pointer
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn is_empty(&self) -> bool {
        self.pointer == 0 && self.value == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_run_sums_to_signed_total() {
        let mut d = DeltaTracker::new();
        for &b in b"+++--" {
            assert!(d.accumulate(Instruction::classify(b).unwrap()));
        }
        assert_eq!(d.value(), 1);
        assert_eq!(d.take_value(), Some(1));
        assert_eq!(d.value(), 0);
        assert!(d.is_empty());
    }

    #[test]
    fn cancelled_run_takes_nothing() {
        let mut d = DeltaTracker::new();
        d.accumulate(Instruction::MoveRight);
        d.accumulate(Instruction::MoveLeft);
        assert_eq!(d.take_pointer(), None);
    }

    #[test]
    fn counters_are_independent() {
        let mut d = DeltaTracker::new();
        d.accumulate(Instruction::MoveLeft);
        d.accumulate(Instruction::MoveLeft);
        d.accumulate(Instruction::Increment);
        assert_eq!(d.take_pointer(), Some(-2));
        assert_eq!(d.value(), 1);
    }

    #[test]
    fn non_mergeable_instructions_are_rejected() {
        let mut d = DeltaTracker::new();
        for instr in [
            Instruction::Write,
            Instruction::Read,
            Instruction::LoopStart,
            Instruction::LoopEnd,
        ] {
            assert!(!d.accumulate(instr));
        }
        assert!(d.is_empty());
    }
}
