//! Cross-component scenarios: real worker threads, live observers, and the
//! full control surface.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use sortscope::generate::generate_sequence_seeded;
use sortscope::{
    AlgorithmKind, DisplayState, EngineConfig, EngineError, RunObserver, RunOutcome, RunPhase,
    RunState, Scheduler, Sequence, cue_frequency,
};

/// Observer that counts steps and remembers the first audio cue.
struct CountingObserver {
    steps: Arc<AtomicUsize>,
    first_cue_millihz: Arc<AtomicU64>,
}

impl RunObserver for CountingObserver {
    fn on_step(&mut self, _snapshot: &Sequence, _state: &RunState) {
        self.steps.fetch_add(1, Ordering::AcqRel);
    }

    fn on_cue(&mut self, frequency: f32) {
        let scaled = (f64::from(frequency) * 1000.0) as u64;
        let _ = self
            .first_cue_millihz
            .compare_exchange(0, scaled, Ordering::AcqRel, Ordering::Acquire);
    }
}

fn counting_scheduler() -> (Scheduler, Arc<AtomicUsize>, Arc<AtomicU64>) {
    let steps = Arc::new(AtomicUsize::new(0));
    let first_cue = Arc::new(AtomicU64::new(0));
    let observer = CountingObserver {
        steps: Arc::clone(&steps),
        first_cue_millihz: Arc::clone(&first_cue),
    };
    let scheduler = Scheduler::with_observer(EngineConfig::default(), Box::new(observer))
        .expect("default config is valid");
    (scheduler, steps, first_cue)
}

fn wait_for_steps(steps: &AtomicUsize, at_least: usize) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while steps.load(Ordering::Acquire) < at_least {
        assert!(Instant::now() < deadline, "observer never saw enough steps");
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn every_variant_completes_sorted_and_settled() {
    for kind in AlgorithmKind::ALL {
        let scheduler = Scheduler::new(EngineConfig::default()).unwrap();
        let sequence = generate_sequence_seeded(12, 7).unwrap();
        scheduler.start(kind, sequence, 100).unwrap();
        let report = scheduler.wait().expect("run report");
        assert_eq!(report.outcome, RunOutcome::Completed, "{kind}");
        assert_eq!(report.algorithm, kind);
        assert!(report.sequence.is_sorted(), "{kind}");
        assert!(report.sequence.all_settled(), "{kind}");
        assert_eq!(scheduler.phase(), RunPhase::Idle);
    }
}

#[test]
fn bubble_counters_match_the_reference_example() {
    let scheduler = Scheduler::new(EngineConfig::default()).unwrap();
    let sequence = Sequence::from_values(&[3, 1, 2]);
    scheduler.start(AlgorithmKind::Bubble, sequence, 100).unwrap();
    let report = scheduler.wait().expect("run report");
    assert_eq!(report.stats.comparisons, 3);
    assert_eq!(report.stats.swaps, 2);
    // The published live state agrees with the report after the run.
    let state = scheduler.state();
    assert_eq!(state.comparisons, 3);
    assert_eq!(state.swaps, 2);
}

#[test]
fn quick_sort_end_to_end_on_the_golden_input() {
    let scheduler = Scheduler::new(EngineConfig::default()).unwrap();
    let sequence = Sequence::from_values(&[5, 3, 8, 1]);
    scheduler.start(AlgorithmKind::Quick, sequence, 100).unwrap();
    let report = scheduler.wait().expect("run report");
    assert_eq!(report.sequence.values(), vec![1, 3, 5, 8]);
    assert_eq!(report.stats.comparisons, 5);
    assert_eq!(report.stats.swaps, 2);
}

#[test]
fn cancellation_resets_the_display_and_stops_the_stream() {
    let (scheduler, steps, _) = counting_scheduler();
    let sequence = generate_sequence_seeded(20, 99).unwrap();
    // Slow enough that cancellation lands mid-run.
    scheduler.start(AlgorithmKind::Bubble, sequence, 5).unwrap();
    wait_for_steps(&steps, 3);
    scheduler.cancel().unwrap();
    let seen_at_cancel = steps.load(Ordering::Acquire);
    let report = scheduler.wait().expect("run report");
    assert_eq!(report.outcome, RunOutcome::Cancelled);
    assert_eq!(scheduler.phase(), RunPhase::Idle);
    assert!(
        report
            .sequence
            .elements()
            .iter()
            .all(|element| element.state == DisplayState::Neutral),
        "cancellation must reset every element to neutral"
    );
    // The in-flight step may finish; nothing beyond it is applied.
    assert!(steps.load(Ordering::Acquire) <= seen_at_cancel + 1);
}

#[test]
fn cancellation_unwinds_recursive_variants() {
    for kind in [AlgorithmKind::Quick, AlgorithmKind::Merge] {
        let (scheduler, steps, _) = counting_scheduler();
        let sequence = generate_sequence_seeded(30, 5).unwrap();
        scheduler.start(kind, sequence, 5).unwrap();
        wait_for_steps(&steps, 4);
        scheduler.cancel().unwrap();
        let report = scheduler.wait().expect("run report");
        assert_eq!(report.outcome, RunOutcome::Cancelled, "{kind}");
        assert_eq!(scheduler.phase(), RunPhase::Idle, "{kind}");
    }
}

#[test]
fn pause_stalls_the_stream_and_resume_completes_it() {
    let (scheduler, steps, _) = counting_scheduler();
    let sequence = generate_sequence_seeded(10, 3).unwrap();
    scheduler.start(AlgorithmKind::Selection, sequence, 5).unwrap();
    wait_for_steps(&steps, 2);
    scheduler.pause().unwrap();
    assert_eq!(scheduler.phase(), RunPhase::Paused);
    // Let the in-flight pacing chunk drain, then verify the stream is stalled.
    thread::sleep(Duration::from_millis(250));
    let stalled_at = steps.load(Ordering::Acquire);
    thread::sleep(Duration::from_millis(300));
    assert_eq!(steps.load(Ordering::Acquire), stalled_at);

    scheduler.resume().unwrap();
    scheduler.set_speed(100);
    let report = scheduler.wait().expect("run report");
    assert_eq!(report.outcome, RunOutcome::Completed);
    assert!(report.sequence.is_sorted());
}

#[test]
fn reentrant_start_is_rejected() {
    let scheduler = Scheduler::new(EngineConfig::default()).unwrap();
    let sequence = generate_sequence_seeded(15, 11).unwrap();
    scheduler.start(AlgorithmKind::Merge, sequence, 5).unwrap();
    let second = generate_sequence_seeded(15, 12).unwrap();
    match scheduler.start(AlgorithmKind::Bubble, second, 50) {
        Err(EngineError::InvalidStateTransition {
            operation: "start",
            phase,
        }) => assert!(matches!(phase, RunPhase::Running | RunPhase::Paused)),
        other => panic!("reentrant start must be rejected, got {other:?}"),
    }
    scheduler.cancel().unwrap();
    let report = scheduler.wait().expect("run report");
    assert_eq!(report.outcome, RunOutcome::Cancelled);
}

#[test]
fn cancel_before_any_start_is_an_error_and_changes_nothing() {
    let scheduler = Scheduler::new(EngineConfig::default()).unwrap();
    let before = scheduler.state();
    assert!(matches!(
        scheduler.cancel(),
        Err(EngineError::InvalidStateTransition {
            operation: "cancel",
            phase: RunPhase::Idle,
        })
    ));
    assert_eq!(scheduler.state(), before);
}

#[test]
fn mid_run_speed_changes_are_accepted() {
    let scheduler = Scheduler::new(EngineConfig::default()).unwrap();
    let sequence = generate_sequence_seeded(20, 21).unwrap();
    scheduler.start(AlgorithmKind::Insertion, sequence, 1).unwrap();
    scheduler.set_speed(100);
    assert_eq!(scheduler.speed(), 100);
    let report = scheduler.wait().expect("run report");
    assert_eq!(report.outcome, RunOutcome::Completed);
}

#[test]
fn first_cue_matches_the_primary_element_of_the_first_step() {
    let (scheduler, _, first_cue) = counting_scheduler();
    // Bubble's first step compares indices 0 and 1; the primary element is
    // index 0, value 3.
    let sequence = Sequence::from_values(&[3, 1, 2]);
    scheduler.start(AlgorithmKind::Bubble, sequence, 100).unwrap();
    let _ = scheduler.wait();
    let expected = (f64::from(cue_frequency(3)) * 1000.0) as u64;
    assert_eq!(first_cue.load(Ordering::Acquire), expected);
}

#[test]
fn disabling_cues_silences_the_audio_callback() {
    let steps = Arc::new(AtomicUsize::new(0));
    let first_cue = Arc::new(AtomicU64::new(0));
    let observer = CountingObserver {
        steps: Arc::clone(&steps),
        first_cue_millihz: Arc::clone(&first_cue),
    };
    let config = EngineConfig::default().with_cues(false);
    let scheduler = Scheduler::with_observer(config, Box::new(observer)).unwrap();
    scheduler
        .start(AlgorithmKind::Bubble, Sequence::from_values(&[2, 1]), 100)
        .unwrap();
    let _ = scheduler.wait();
    assert!(steps.load(Ordering::Acquire) > 0);
    assert_eq!(first_cue.load(Ordering::Acquire), 0);
}

#[test]
fn a_finished_scheduler_accepts_a_new_run() {
    let scheduler = Scheduler::new(EngineConfig::default()).unwrap();
    let first = generate_sequence_seeded(10, 1).unwrap();
    scheduler.start(AlgorithmKind::Bubble, first, 100).unwrap();
    let _ = scheduler.wait();
    let second = generate_sequence_seeded(10, 2).unwrap();
    scheduler.start(AlgorithmKind::Merge, second, 100).unwrap();
    let report = scheduler.wait().expect("run report");
    assert_eq!(report.algorithm, AlgorithmKind::Merge);
    assert_eq!(report.outcome, RunOutcome::Completed);
}
