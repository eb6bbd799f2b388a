use pretty_assertions::assert_eq;
use rv32sim_core::isa::encode;
use rv32sim_core::stats::{STATS_SECTIONS, SimStats};

use crate::common::harness::TestContext;

fn run_mix() -> SimStats {
    let mut ctx = TestContext::new().load_program(
        0,
        &[
            encode::addi(1, 0, 0x200), // I, alu
            encode::sw(1, 1, 0),       // S, store
            encode::lw(2, 1, 0),       // I, load
            encode::beq(1, 2, 8),      // B, taken
            encode::nop(),             // skipped
            encode::bne(1, 2, 8),      // B, not taken
            encode::lui(3, 1),         // U
            encode::jal(0, 4),         // J
            encode::add(4, 1, 2),      // R
            encode::ebreak(),          // I, system
        ],
    );
    let _ = ctx.run(100);
    ctx.sim.stats.clone()
}

#[test]
fn counts_by_format_and_class() {
    let stats = run_mix();
    assert_eq!(stats.instructions_retired, 9);
    assert_eq!(
        (
            stats.format_r,
            stats.format_i,
            stats.format_s,
            stats.format_b,
            stats.format_u,
            stats.format_j
        ),
        (1, 3, 1, 2, 1, 1)
    );
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_branch, 2);
    assert_eq!(stats.inst_upper, 1);
    assert_eq!(stats.inst_jump, 1);
    assert_eq!(stats.inst_system, 1);
    assert_eq!((stats.branches_taken, stats.branches_not_taken), (1, 1));
}

#[test]
fn reset_clears_counters() {
    let mut stats = run_mix();
    stats.reset();
    assert_eq!(stats, SimStats::default());
}

#[test]
fn report_sections() {
    let stats = run_mix();
    let full = stats.to_string();
    assert!(full.contains("sim_insts                9"), "{full}");
    assert!(full.contains("BRANCHES"));

    let only_branch = stats.render_sections(&["branch"]);
    assert!(only_branch.starts_with("BRANCHES"));
    assert!(!only_branch.contains("FORMAT MIX"));
    assert_eq!(STATS_SECTIONS.len(), 4);
}

#[test]
fn every_named_section_equals_full_report() {
    let stats = run_mix();
    assert_eq!(stats.render_sections(STATS_SECTIONS), stats.to_string());
    assert_eq!(stats.render_sections(&["no_such_section"]), "");
}

#[test]
fn stats_serialize() {
    let value = serde_json::to_value(run_mix()).unwrap();
    assert_eq!(value["instructions_retired"], 9);
    assert_eq!(value["branches_taken"], 1);
}
