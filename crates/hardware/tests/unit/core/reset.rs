use pretty_assertions::assert_eq;
use rv32sim_core::config::Config;
use rv32sim_core::isa::encode;
use rv32sim_core::isa::instruction::Op;
use rv32sim_core::Cpu;

use crate::common::harness::TestContext;

#[test]
fn reset_zeroes_registers_but_sets_pc_and_sp() {
    let mut ctx = TestContext::new().load_program(0x80, &[encode::addi(5, 0, 7)]);
    let _ = ctx.step();
    ctx.set_reg(2, 0);
    ctx.sim.reset();

    let mut expected = [0; 32];
    expected[2] = ctx.sim.memory.size() as i32;
    assert_eq!(ctx.sim.cpu.regs.values(), expected);
    assert_eq!(ctx.pc(), 0);
    assert_eq!(ctx.sim.cpu.pc_last(), None);
    assert_eq!(ctx.sim.stats.instructions_retired, 0);
}

#[test]
fn reset_keeps_memory() {
    let mut ctx = TestContext::new().load_program(0, &[encode::addi(5, 0, 7)]);
    let _ = ctx.step();
    ctx.sim.reset();
    let _ = ctx.step();
    assert_eq!(ctx.get_reg(5), 7);
}

#[test]
fn configured_start_pc_and_sp() {
    let config = Config::from_json(
        r#"{ "general": { "start_pc": 64, "initial_sp": 4096 }, "memory": { "size": 8192 } }"#,
    )
    .unwrap();
    let cpu = Cpu::new(&config);
    assert_eq!(cpu.pc, 64);
    assert_eq!(cpu.regs.read(2).unwrap(), 4096);
}

#[test]
fn full_address_space_sp_truncates_to_zero() {
    let mut config = Config::default();
    config.memory.size = 1 << 32;
    let cpu = Cpu::new(&config);
    assert_eq!(cpu.regs.read(2).unwrap(), 0);
}

#[test]
fn pc_last_and_last_instruction_follow_steps() {
    let mut ctx =
        TestContext::new().load_program(0, &[encode::addi(1, 0, 1), encode::jal(0, 12)]);
    assert_eq!(ctx.sim.cpu.pc_last(), None);
    let _ = ctx.step();
    assert_eq!(ctx.sim.cpu.pc_last(), Some(0));
    let _ = ctx.step();
    assert_eq!(ctx.sim.cpu.pc_last(), Some(4));
    assert_eq!(ctx.pc(), 16);
    assert_eq!(ctx.sim.cpu.last_instruction().map(|i| i.op), Some(Op::Jal));
    assert_eq!(ctx.sim.cpu.last_record().map(|r| r.pc_after), Some(16));
}
