//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Register names are a software convention with no effect on execution; this
//! table exists for display and disassembly only.

use crate::common::constants::NUM_REGS;

/// Register x2 (stack pointer, sp).
pub const REG_SP: usize = 2;
/// Register x8 (saved register / frame pointer, s0/fp).
pub const REG_FP: usize = 8;

/// ABI names for x0–x31. `x8` is listed by its `s0` name; `fp` is an alias.
pub const REG_NAMES: [&str; NUM_REGS] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for a register index, or `None` outside `0..=31`.
#[inline]
pub fn name(idx: usize) -> Option<&'static str> {
    REG_NAMES.get(idx).copied()
}

/// Looks up a register index by ABI name (`"sp"`, `"fp"`) or numeric name (`"x2"`).
pub fn index_of(name: &str) -> Option<usize> {
    if name == "fp" {
        return Some(REG_FP);
    }
    if let Some(idx) = REG_NAMES.iter().position(|&n| n == name) {
        return Some(idx);
    }
    name.strip_prefix('x')
        .and_then(|digits| digits.parse::<usize>().ok())
        .filter(|&idx| idx < NUM_REGS)
}
