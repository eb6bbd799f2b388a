use rv32sim_core::config::Config;
use rv32sim_core::sim::{RunExit, StepRecord};
use rv32sim_core::Simulator;
use tracing_subscriber::EnvFilter;

use super::builder::program_bytes;

/// Installs a test-friendly tracing subscriber once per process.
///
/// Respects `RUST_LOG`; output is captured by the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        init_tracing();
        let sim = Simulator::new(config).expect("test configuration is valid");
        Self { sim }
    }

    /// Loads a sequence of 32-bit instructions at `addr` and points `pc` there.
    pub fn load_program(mut self, addr: u32, instructions: &[u32]) -> Self {
        self.sim
            .load_program(&program_bytes(instructions), addr)
            .expect("program fits in memory");
        self.sim.cpu.pc = addr;
        self
    }

    /// Sets a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: i32) {
        self.sim.cpu.regs.write(reg, val).expect("valid register index");
    }

    /// Reads a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> i32 {
        self.sim.register(reg).expect("valid register index")
    }

    pub fn pc(&self) -> u32 {
        self.sim.cpu.pc
    }

    /// Executes one instruction, panicking on a simulation error.
    pub fn step(&mut self) -> StepRecord {
        self.sim.step().expect("step succeeds")
    }

    /// Executes `n` instructions and returns their records.
    pub fn step_n(&mut self, n: usize) -> Vec<StepRecord> {
        (0..n).map(|_| self.step()).collect()
    }

    /// Runs until a halt or `max_steps`.
    pub fn run(&mut self, max_steps: u64) -> RunExit {
        self.sim.run(max_steps).expect("run succeeds")
    }
}
