//! Simulator Tests.
//!
//! End-to-end programs stepped through the public `Simulator` surface.

use pretty_assertions::assert_eq;
use rv32sim_core::common::SimError;
use rv32sim_core::isa::encode;
use rv32sim_core::sim::RunExit;
use rv32sim_core::{Config, Simulator};

use crate::common::builder::program_bytes;
use crate::common::harness::TestContext;

#[test]
fn two_addis_end_to_end() {
    let mut sim = Simulator::new(&Config::default()).unwrap();
    let program = program_bytes(&[encode::addi(5, 0, 10), encode::addi(5, 5, 5)]);
    sim.load_program(&program, 0).unwrap();
    sim.reset();

    let first = sim.step().unwrap();
    let second = sim.step().unwrap();

    assert_eq!(sim.register(5).unwrap(), 15);
    assert_eq!(sim.cpu.pc, 8);
    assert_eq!((first.pc_before, first.pc_after), (0, 4));
    assert_eq!((second.pc_before, second.pc_after), (4, 8));
    assert_eq!(second.register_write.map(|w| (w.old, w.new)), Some((10, 15)));
}

#[test]
fn sum_loop_runs_to_ebreak() {
    // a0 = 1 + 2 + ... + 10
    let program = [
        encode::addi(10, 0, 0),  // a0 = 0
        encode::addi(5, 0, 1),   // t0 = 1
        encode::addi(6, 0, 11),  // t1 = 11
        encode::add(10, 10, 5),  // loop: a0 += t0
        encode::addi(5, 5, 1),   // t0 += 1
        encode::blt(5, 6, -8),   // if t0 < t1 goto loop
        encode::ebreak(),
    ];
    let mut ctx = TestContext::new().load_program(0, &program);
    let exit = ctx.run(1_000);
    assert_eq!(ctx.get_reg(10), 55);
    assert_eq!(exit, RunExit::Halted { pc: 24, steps: 34 });
    assert_eq!(ctx.pc(), 28);
}

#[test]
fn run_stops_at_step_limit() {
    // An infinite loop: jal x0, 0
    let mut ctx = TestContext::new().load_program(0, &[encode::jal(0, 0)]);
    assert_eq!(ctx.run(25), RunExit::StepLimit { steps: 25 });
    assert_eq!(ctx.sim.stats.instructions_retired, 25);
}

#[test]
fn run_surfaces_errors() {
    let mut ctx = TestContext::new().load_program(0, &[encode::nop(), 0]);
    assert!(matches!(ctx.sim.run(10), Err(SimError::Decode { pc: 4, .. })));
    assert_eq!(ctx.sim.stats.instructions_retired, 1);
}

#[test]
fn recursive_call_uses_the_stack() {
    // fact(5) with a real call frame: ra and a0 saved on the stack.
    let program = [
        encode::addi(10, 0, 5),  // 0x00: a0 = 5
        encode::jal(1, 8),       // 0x04: call fact
        encode::ebreak(),        // 0x08
        // fact: 0x0C
        encode::addi(2, 2, -8),  // push frame
        encode::sw(1, 2, 4),
        encode::sw(10, 2, 0),
        encode::addi(5, 0, 1),
        encode::bge(5, 10, 24),  // if 1 >= a0 goto base (0x34)
        encode::addi(10, 10, -1),
        encode::jal(1, -24),     // fact(a0 - 1)
        encode::lw(5, 2, 0),     // t0 = saved a0
        encode::mul(10, 10, 5),
        encode::jal(0, 8),       // goto ret (0x38)
        // base: 0x34
        encode::addi(10, 0, 1),
        // ret: 0x38
        encode::lw(1, 2, 4),
        encode::addi(2, 2, 8),
        encode::jalr(0, 1, 0),
    ];
    let mut ctx = TestContext::new().load_program(0, &program);
    let top = ctx.sim.memory.size() as i32;
    let exit = ctx.run(10_000);
    assert!(matches!(exit, RunExit::Halted { pc: 8, .. }));
    assert_eq!(ctx.get_reg(10), 120);
    assert_eq!(ctx.get_reg(2), top);
}

#[test]
fn from_json_builds_configured_simulator() {
    let sim = Simulator::from_json(r#"{ "memory": { "size": 1024 } }"#).unwrap();
    assert_eq!(sim.memory.size(), 1024);
    assert_eq!(sim.register(2).unwrap(), 1024);
}

#[test]
fn register_names() {
    assert_eq!(Simulator::register_name(2), Ok("sp"));
    assert_eq!(
        Simulator::register_name(40),
        Err(SimError::IndexOutOfRange(40))
    );
}

#[test]
fn trace_output_does_not_change_results() {
    let mut config = Config::default();
    config.general.trace_instructions = true;
    let mut ctx = TestContext::with_config(&config).load_program(0, &[encode::addi(1, 0, 3)]);
    let _ = ctx.step();
    assert_eq!(ctx.get_reg(1), 3);
}
