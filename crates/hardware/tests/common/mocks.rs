use mockall::mock;
use rv32sim_core::sim::{StepObserver, StepRecord};

mock! {
    pub Observer {}
    impl StepObserver for Observer {
        fn on_step(&mut self, record: &StepRecord);
    }
}
