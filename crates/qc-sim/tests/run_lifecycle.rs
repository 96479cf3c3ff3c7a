use qc_sim::{RunOutcome, RunSimulator, RunState, SimError, SimOptions, TickOutcome};

fn sim() -> RunSimulator {
    RunSimulator::seeded(SimOptions::default(), 42)
}

#[test]
fn full_run_completes_with_ordered_records() {
    let mut sim = sim();
    sim.start(8).unwrap();

    for k in 0..7 {
        assert_eq!(sim.tick(), TickOutcome::Cycle { elapsed: k });
    }
    assert_eq!(sim.tick(), TickOutcome::Finished(RunOutcome::Completed));
    assert_eq!(sim.state(), RunState::Completed);

    let records = sim.take_records();
    assert_eq!(records.len(), 8);
    for (k, record) in records.iter().enumerate() {
        assert_eq!(record.elapsed, k);
    }

    sim.reset();
    assert_eq!(sim.state(), RunState::Idle);
}

#[test]
fn stop_realizes_on_next_tick_with_one_extra_record() {
    let mut sim = sim();
    sim.start(40).unwrap();

    for _ in 0..5 {
        sim.tick();
    }
    sim.request_stop();
    // Still running until the next tick boundary.
    assert_eq!(sim.state(), RunState::Running);
    assert_eq!(sim.records().len(), 5);

    assert_eq!(sim.tick(), TickOutcome::Finished(RunOutcome::Stopped));
    assert_eq!(sim.state(), RunState::Stopped);
    assert_eq!(sim.records().len(), 6);
}

#[test]
fn stop_after_run_finished_is_inert() {
    let mut sim = sim();
    sim.start(2).unwrap();
    sim.tick();
    sim.tick();
    assert_eq!(sim.state(), RunState::Completed);

    sim.request_stop();
    assert_eq!(sim.tick(), TickOutcome::Ignored);
    assert_eq!(sim.state(), RunState::Completed);
}

#[test]
fn start_while_running_is_rejected_without_clobbering_records() {
    let mut sim = sim();
    sim.start(10).unwrap();
    sim.tick();
    sim.tick();
    let before = sim.records().to_vec();

    let err = sim.start(10).unwrap_err();
    assert!(matches!(err, SimError::NotIdle { state: "running" }));
    assert_eq!(sim.records(), &before[..]);
    assert_eq!(sim.current_cycle(), 2);
    assert_eq!(sim.state(), RunState::Running);
}

#[test]
fn start_requires_reset_after_finish() {
    let mut sim = sim();
    sim.start(1).unwrap();
    sim.tick();
    assert_eq!(sim.state(), RunState::Completed);

    assert!(sim.start(1).is_err());
    sim.reset();
    sim.start(1).unwrap();
    assert_eq!(sim.state(), RunState::Running);
    assert!(sim.records().is_empty());
}

#[test]
fn restart_clears_previous_records() {
    let mut sim = sim();
    sim.start(3).unwrap();
    sim.tick();
    sim.request_stop();
    sim.tick();
    assert_eq!(sim.records().len(), 2);

    sim.reset();
    sim.start(3).unwrap();
    assert!(sim.records().is_empty());
    assert_eq!(sim.current_cycle(), 0);
}

#[test]
fn progress_tracks_cycle_counter() {
    let mut sim = sim();
    sim.start(4).unwrap();
    assert_eq!(sim.progress(), 0.0);
    sim.tick();
    assert_eq!(sim.progress(), 0.25);
    sim.tick();
    sim.tick();
    sim.tick();
    assert_eq!(sim.progress(), 1.0);
}
