use interval_timer::{
    machine::{MachineOptions, PhaseMachine},
    state::WorkoutConfig,
    utils::{format_time, parse_time},
};
use proptest::prelude::*;

fn any_config() -> impl Strategy<Value = WorkoutConfig> {
    (0u32..200, 0u32..200, 0u32..200, 0u32..25, 0u32..25)
        .prop_map(|(w, r, rr, e, n)| WorkoutConfig::new(w, r, rr, e, n))
}

fn runnable_config() -> impl Strategy<Value = WorkoutConfig> {
    (1u32..8, 0u32..5, 0u32..5, 1u32..4, 1u32..4)
        .prop_map(|(w, r, rr, e, n)| WorkoutConfig::new(w, r, rr, e, n))
}

proptest! {
    #[test]
    fn preview_is_monotone_in_every_input(
        config in any_config(),
        field in 0usize..5,
        bump in 1u32..50,
        prepare in any::<bool>(),
    ) {
        let mut bigger = config;
        match field {
            0 => bigger.work_seconds += bump,
            1 => bigger.rest_seconds += bump,
            2 => bigger.round_rest_seconds += bump,
            3 => bigger.exercise_count += bump,
            _ => bigger.round_count += bump,
        }
        prop_assert!(bigger.total_seconds(prepare) >= config.total_seconds(prepare));
    }

    #[test]
    fn formatted_time_parses_back(seconds in 0u64..6000) {
        prop_assert_eq!(parse_time(&format_time(seconds)), Some(seconds));
    }

    #[test]
    fn workout_takes_exactly_the_previewed_ticks(
        config in runnable_config(),
        prepare in any::<bool>(),
    ) {
        let mut machine = PhaseMachine::new(MachineOptions { prepare, halfway_cue: false });
        machine.start(&config).unwrap();

        let mut ticks = 0u64;
        while machine.is_running() {
            machine.tick(&config);
            ticks += 1;
        }
        prop_assert_eq!(ticks, config.total_seconds(prepare));
    }

    #[test]
    fn second_pause_changes_nothing(config in runnable_config(), ticks in 0u32..6) {
        let mut machine = PhaseMachine::default();
        machine.start(&config).unwrap();
        for _ in 0..ticks {
            machine.tick(&config);
        }

        machine.pause();
        let after_first = machine.state().clone();
        let step = machine.pause();
        prop_assert!(step.is_empty());
        prop_assert_eq!(machine.state(), &after_first);
    }
}
