use innate::battle::BattleState;

/// Asserts that log entries added since the last read are equal to the given entries.
///
/// Consumes the entries it reads, so consecutive calls assert on consecutive
/// slices of the battle log.
#[track_caller]
pub fn assert_new_logs_eq(state: &mut BattleState, want: &[&str]) {
    let got = state.log_mut().read_out();
    pretty_assertions::assert_eq!(got, want);
}

/// Asserts that the full battle log is equal to the given entries.
#[track_caller]
pub fn assert_logs_since_start_eq(state: &BattleState, want: &[&str]) {
    let got = state.log().entries().collect::<Vec<_>>();
    pretty_assertions::assert_eq!(got, want);
}
