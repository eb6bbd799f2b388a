use rstest::rstest;
use rv32sim_core::core::units::bru::{BranchCond, Bru};
use rv32sim_core::isa::instruction::Op;

#[rstest]
#[case(BranchCond::Eq, 5, 5, true)]
#[case(BranchCond::Eq, 5, 6, false)]
#[case(BranchCond::Ne, 5, 6, true)]
#[case(BranchCond::Lt, -1, 0, true)]
#[case(BranchCond::Ge, 0, -1, true)]
#[case(BranchCond::Ge, 3, 3, true)]
#[case(BranchCond::Ltu, -1, 0, false)]
#[case(BranchCond::Ltu, 0, -1, true)]
#[case(BranchCond::Geu, -1, 0, true)]
fn conditions(#[case] cond: BranchCond, #[case] a: i32, #[case] b: i32, #[case] taken: bool) {
    assert_eq!(Bru::taken(cond, a, b), taken);
}

#[test]
fn relative_target_wraps() {
    assert_eq!(Bru::relative_target(0x100, -8), 0xF8);
    assert_eq!(Bru::relative_target(0, -4), 0xFFFF_FFFC);
}

#[test]
fn jalr_target_clears_low_bit() {
    assert_eq!(Bru::jalr_target(0x101, 0), 0x100);
    assert_eq!(Bru::jalr_target(0x100, 3), 0x102);
}

#[test]
fn only_branches_have_conditions() {
    assert_eq!(BranchCond::from_op(Op::Bgeu), Some(BranchCond::Geu));
    assert_eq!(BranchCond::from_op(Op::Jal), None);
}
