//! Simulation statistics collection and reporting.
//!
//! This module tracks what the simulated program has executed. It provides:
//! 1. **Retirement:** Total instructions retired since the last reset.
//! 2. **Format mix:** Counts by encoding format (R/I/S/B/U/J).
//! 3. **Instruction mix:** Counts by category (ALU, load, store, branch, jump, system).
//! 4. **Branches:** Conditional branches taken and not taken.
//!
//! Statistics are derived purely from [`StepRecord`]s, so replaying the same
//! records always reproduces the same numbers.

use std::fmt::{self, Write as _};

use serde::Serialize;

use crate::isa::instruction::{InstructionType, OpClass};
use crate::sim::record::StepRecord;

/// Simulation statistics structure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Count of R-type instructions retired.
    pub format_r: u64,
    /// Count of I-type instructions retired.
    pub format_i: u64,
    /// Count of S-type instructions retired.
    pub format_s: u64,
    /// Count of B-type instructions retired.
    pub format_b: u64,
    /// Count of U-type instructions retired.
    pub format_u: u64,
    /// Count of J-type instructions retired.
    pub format_j: u64,

    /// Count of ALU instructions (register and immediate, including M) retired.
    pub inst_alu: u64,
    /// Count of LUI/AUIPC instructions retired.
    pub inst_upper: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branches retired.
    pub inst_branch: u64,
    /// Count of JAL/JALR instructions retired.
    pub inst_jump: u64,
    /// Count of FENCE/ECALL/EBREAK instructions retired.
    pub inst_system: u64,

    /// Conditional branches that redirected `pc`.
    pub branches_taken: u64,
    /// Conditional branches that fell through.
    pub branches_not_taken: u64,
}

/// Section names accepted by [`SimStats::render_sections`].
pub const STATS_SECTIONS: &[&str] = &["summary", "format_mix", "instruction_mix", "branch"];

impl SimStats {
    /// Accounts for one retired instruction.
    pub const fn record(&mut self, record: &StepRecord) {
        let inst = &record.instruction;
        self.instructions_retired += 1;

        match inst.itype {
            InstructionType::R => self.format_r += 1,
            InstructionType::I => self.format_i += 1,
            InstructionType::S => self.format_s += 1,
            InstructionType::B => self.format_b += 1,
            InstructionType::U => self.format_u += 1,
            InstructionType::J => self.format_j += 1,
        }

        match inst.op.class() {
            OpClass::Alu => self.inst_alu += 1,
            OpClass::UpperImmediate => self.inst_upper += 1,
            OpClass::Load => self.inst_load += 1,
            OpClass::Store => self.inst_store += 1,
            OpClass::Branch => {
                self.inst_branch += 1;
                if record.branch_taken {
                    self.branches_taken += 1;
                } else {
                    self.branches_not_taken += 1;
                }
            }
            OpClass::Jump => self.inst_jump += 1,
            OpClass::System => self.inst_system += 1,
        }
    }

    /// Clears every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Renders the named sections as a plain-text report.
    ///
    /// An empty `sections` slice renders everything; unknown names are ignored.
    pub fn render_sections(&self, sections: &[&str]) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_sections(&mut out, sections);
        out
    }

    fn write_sections(&self, out: &mut String, sections: &[&str]) -> fmt::Result {
        let want = |s: &str| sections.is_empty() || sections.contains(&s);
        let total = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| n as f64 / total * 100.0;

        if want("summary") {
            writeln!(out, "==========================================================")?;
            writeln!(out, "RV32IM SIMULATION STATISTICS")?;
            writeln!(out, "==========================================================")?;
            writeln!(out, "sim_insts                {}", self.instructions_retired)?;
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("format_mix") {
            writeln!(out, "FORMAT MIX")?;
            for (name, n) in [
                ("R", self.format_r),
                ("I", self.format_i),
                ("S", self.format_s),
                ("B", self.format_b),
                ("U", self.format_u),
                ("J", self.format_j),
            ] {
                writeln!(out, "  format.{name}               {n} ({:.2}%)", pct(n))?;
            }
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("instruction_mix") {
            writeln!(out, "INSTRUCTION MIX")?;
            for (name, n) in [
                ("alu", self.inst_alu),
                ("upper", self.inst_upper),
                ("load", self.inst_load),
                ("store", self.inst_store),
                ("branch", self.inst_branch),
                ("jump", self.inst_jump),
                ("system", self.inst_system),
            ] {
                writeln!(out, "  op.{name:<20}{n} ({:.2}%)", pct(n))?;
            }
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("branch") {
            let branches = self.inst_branch.max(1) as f64;
            writeln!(out, "BRANCHES")?;
            writeln!(
                out,
                "  branch.taken           {} ({:.2}%)",
                self.branches_taken,
                self.branches_taken as f64 / branches * 100.0
            )?;
            writeln!(
                out,
                "  branch.not_taken       {} ({:.2}%)",
                self.branches_not_taken,
                self.branches_not_taken as f64 / branches * 100.0
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_sections(&[]))
    }
}
