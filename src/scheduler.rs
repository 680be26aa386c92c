//! Pausable, cancellable, speed-controlled run controller.
//!
//! The [`Scheduler`] owns the lifecycle state machine
//! `Idle -> Running -> {Paused <-> Running} -> {Completed, Cancelled} -> Idle`
//! as an atomic phase word; control calls transition it with compare-exchange
//! so reentrant `start` and misplaced `pause`/`resume`/`cancel` are rejected
//! rather than queued.
//!
//! A run executes on one named worker thread: the selected algorithm emits
//! steps into a live sink that applies each step to the working sequence,
//! updates the counters, publishes a snapshot to the observer, and then
//! suspends for the speed-derived interval. The suspension is chunked at the
//! pause-poll period, so pause, resume, speed changes, and cancellation are
//! all observed with bounded latency. Cancellation resolves every pending
//! wait to an abort that unwinds the algorithm through any recursion depth;
//! the worker then resets the display to neutral before going idle.

use std::sync::atomic::{AtomicU8, AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::algorithms::{AlgorithmKind, StepSink};
use crate::config::{EngineConfig, SPEED_MAX, SPEED_MIN, interval_for_speed};
use crate::error::{EngineError, EngineResult, RunInterrupt};
use crate::observer::{NullObserver, RunObserver, cue_frequency};
use crate::sequence::Sequence;
use crate::stats::RunStats;
use crate::types::{RunOutcome, RunPhase, RunState, Step};

type SharedObserver = Arc<Mutex<Box<dyn RunObserver>>>;

/// Final record of one run, available through [`Scheduler::wait`] after the
/// worker finishes.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The variant that was driven.
    pub algorithm: AlgorithmKind,
    /// How the run ended.
    pub outcome: RunOutcome,
    /// Final counter values.
    pub stats: RunStats,
    /// The sequence as the run left it: sorted and settled on completion,
    /// reset to neutral on cancellation or fault.
    pub sequence: Sequence,
}

struct SharedState {
    phase: AtomicU8,
    speed: AtomicU32,
    comparisons: AtomicU64,
    swaps: AtomicU64,
    last_report: Mutex<Option<RunReport>>,
}

impl SharedState {
    fn phase(&self) -> RunPhase {
        RunPhase::from_u8(self.phase.load(Ordering::Acquire))
    }

    fn transition(&self, from: RunPhase, to: RunPhase) -> bool {
        self.phase
            .compare_exchange(from.as_u8(), to.as_u8(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    fn state(&self) -> RunState {
        RunState {
            phase: self.phase(),
            comparisons: self.comparisons.load(Ordering::Acquire),
            swaps: self.swaps.load(Ordering::Acquire),
        }
    }

    fn publish_stats(&self, stats: RunStats) {
        self.comparisons.store(stats.comparisons, Ordering::Release);
        self.swaps.store(stats.swaps, Ordering::Release);
    }
}

/// The public control surface of the engine.
///
/// All methods take `&self`; the scheduler is safe to share behind an `Arc`
/// between a UI thread issuing control calls and anything polling
/// [`Scheduler::state`].
pub struct Scheduler {
    config: EngineConfig,
    shared: Arc<SharedState>,
    observer: SharedObserver,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
}

impl Scheduler {
    /// Create a scheduler that discards observer output.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when the configuration fails validation.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        Self::with_observer(config, Box::new(NullObserver))
    }

    /// Create a scheduler publishing to the given observer.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when the configuration fails validation.
    pub fn with_observer(
        config: EngineConfig,
        observer: Box<dyn RunObserver>,
    ) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            shared: Arc::new(SharedState {
                phase: AtomicU8::new(RunPhase::Idle.as_u8()),
                speed: AtomicU32::new(crate::config::DEFAULT_SPEED),
                comparisons: AtomicU64::new(0),
                swaps: AtomicU64::new(0),
                last_report: Mutex::new(None),
            }),
            observer: Arc::new(Mutex::new(observer)),
            worker: Mutex::new(None),
        })
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> RunPhase {
        self.shared.phase()
    }

    /// Live phase and counter snapshot.
    #[must_use]
    pub fn state(&self) -> RunState {
        self.shared.state()
    }

    /// Current speed slider position.
    #[must_use]
    pub fn speed(&self) -> u32 {
        self.shared.speed.load(Ordering::Acquire)
    }

    /// Update the speed. Accepted at any time, even mid-run; takes effect at
    /// the next suspension chunk without rescheduling an elapsed wait.
    /// Out-of-range values are clamped.
    pub fn set_speed(&self, speed: u32) {
        let clamped = speed.clamp(SPEED_MIN, SPEED_MAX);
        self.shared.speed.store(clamped, Ordering::Release);
        debug!(speed = clamped, "speed updated");
    }

    /// Start a run: snapshot the sequence, reset the counters, and drive the
    /// chosen variant on a worker thread.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` when a run is already in progress, and
    /// `WorkerSpawn` when the OS refuses the thread.
    pub fn start(
        &self,
        algorithm: AlgorithmKind,
        sequence: Sequence,
        initial_speed: u32,
    ) -> EngineResult<()> {
        if !self.shared.transition(RunPhase::Idle, RunPhase::Running) {
            return Err(EngineError::InvalidStateTransition {
                operation: "start",
                phase: self.shared.phase(),
            });
        }
        // Reap the previous worker so handles do not accumulate across runs.
        if let Some(handle) = lock_or_recover(&self.worker).take() {
            let _ = handle.join();
        }
        self.set_speed(initial_speed);
        self.shared.publish_stats(RunStats::default());
        info!(
            algorithm = %algorithm,
            sequence_len = sequence.len(),
            speed = self.speed(),
            "run started"
        );

        let shared = Arc::clone(&self.shared);
        let observer = Arc::clone(&self.observer);
        let pause_poll = self.config.pause_poll;
        let emit_cues = self.config.emit_cues;
        let handle = thread::Builder::new()
            .name("sortscope-run".to_owned())
            .spawn(move || {
                run_worker(algorithm, sequence, &shared, &observer, pause_poll, emit_cues);
            })
            .map_err(|source| {
                self.shared
                    .phase
                    .store(RunPhase::Idle.as_u8(), Ordering::Release);
                EngineError::WorkerSpawn { source }
            })?;
        *lock_or_recover(&self.worker) = Some(handle);
        Ok(())
    }

    /// Suspend the run after the in-flight step.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` unless the engine is `Running`.
    pub fn pause(&self) -> EngineResult<()> {
        if self.shared.transition(RunPhase::Running, RunPhase::Paused) {
            debug!("run paused");
            Ok(())
        } else {
            Err(EngineError::InvalidStateTransition {
                operation: "pause",
                phase: self.shared.phase(),
            })
        }
    }

    /// Resume a paused run. Latency is bounded by the pause-poll period,
    /// independent of the speed setting.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` unless the engine is `Paused`.
    pub fn resume(&self) -> EngineResult<()> {
        if self.shared.transition(RunPhase::Paused, RunPhase::Running) {
            debug!("run resumed");
            Ok(())
        } else {
            Err(EngineError::InvalidStateTransition {
                operation: "resume",
                phase: self.shared.phase(),
            })
        }
    }

    /// Request cancellation. The in-flight step finishes, no further steps
    /// are applied, and the display resets to neutral before the engine goes
    /// idle.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` unless the engine is `Running` or `Paused`.
    pub fn cancel(&self) -> EngineResult<()> {
        if self.shared.transition(RunPhase::Running, RunPhase::Cancelling)
            || self.shared.transition(RunPhase::Paused, RunPhase::Cancelling)
        {
            debug!("cancellation requested");
            Ok(())
        } else {
            Err(EngineError::InvalidStateTransition {
                operation: "cancel",
                phase: self.shared.phase(),
            })
        }
    }

    /// Block until the current run (if any) finishes and return the report of
    /// the most recently completed run.
    #[must_use]
    pub fn wait(&self) -> Option<RunReport> {
        if let Some(handle) = lock_or_recover(&self.worker).take() {
            let _ = handle.join();
        }
        lock_or_recover(&self.shared.last_report).clone()
    }
}

fn run_worker(
    algorithm: AlgorithmKind,
    sequence: Sequence,
    shared: &Arc<SharedState>,
    observer: &SharedObserver,
    pause_poll: Duration,
    emit_cues: bool,
) {
    let run_span = tracing::info_span!(
        "sortscope::run",
        algorithm = %algorithm,
        sequence_len = sequence.len()
    );
    let _entered = run_span.enter();
    let values = sequence.values();
    let mut sink = LiveSink {
        shared: Arc::clone(shared),
        observer: Arc::clone(observer),
        sequence,
        stats: RunStats::default(),
        pause_poll,
        emit_cues,
    };
    let driven = algorithm.emit(&values, &mut sink);
    let LiveSink {
        mut sequence,
        stats,
        ..
    } = sink;

    let outcome = match driven {
        Ok(()) => RunOutcome::Completed,
        Err(RunInterrupt::Cancelled) => {
            sequence.reset_states();
            RunOutcome::Cancelled
        }
        Err(RunInterrupt::Fault(fault)) => {
            error!(%fault, "run aborted on invariant violation");
            sequence.reset_states();
            RunOutcome::Faulted
        }
    };

    shared.publish_stats(stats);
    let final_state = RunState {
        phase: RunPhase::Idle,
        comparisons: stats.comparisons,
        swaps: stats.swaps,
    };
    lock_or_recover(observer).on_finish(&sequence, &final_state, outcome);
    *lock_or_recover(&shared.last_report) = Some(RunReport {
        algorithm,
        outcome,
        stats,
        sequence,
    });
    // Going idle is the last store: control calls observing Idle may start a
    // new run immediately.
    shared.phase.store(RunPhase::Idle.as_u8(), Ordering::Release);
    match outcome {
        RunOutcome::Completed => info!(
            algorithm = %algorithm,
            comparisons = stats.comparisons,
            swaps = stats.swaps,
            "run completed"
        ),
        RunOutcome::Cancelled => info!(algorithm = %algorithm, "run cancelled, display reset"),
        RunOutcome::Faulted => {}
    }
}

/// The scheduler side of the step contract: applies, counts, publishes, and
/// paces each accepted step.
struct LiveSink {
    shared: Arc<SharedState>,
    observer: SharedObserver,
    sequence: Sequence,
    stats: RunStats,
    pause_poll: Duration,
    emit_cues: bool,
}

impl StepSink for LiveSink {
    fn accept(&mut self, step: Step) -> Result<(), RunInterrupt> {
        self.sequence.apply(&step).map_err(RunInterrupt::Fault)?;
        self.stats.record(&step);
        self.shared.publish_stats(self.stats);
        let state = self.shared.state();
        {
            let mut observer = lock_or_recover(&self.observer);
            observer.on_step(&self.sequence, &state);
            if self.emit_cues
                && let Some(index) = step.primary_index()
            {
                observer.on_cue(cue_frequency(self.sequence.elements()[index].value));
            }
        }
        self.pace()
    }
}

impl LiveSink {
    /// Inter-step suspension: sleep the speed-derived interval in pause-poll
    /// chunks, re-reading speed each chunk, holding while paused, and
    /// resolving to an abort once cancellation is requested.
    fn pace(&self) -> Result<(), RunInterrupt> {
        let mut waited = Duration::ZERO;
        loop {
            match self.shared.phase() {
                RunPhase::Cancelling => return Err(RunInterrupt::Cancelled),
                RunPhase::Paused => thread::sleep(self.pause_poll),
                RunPhase::Running => {
                    let interval = interval_for_speed(self.shared.speed.load(Ordering::Acquire));
                    if waited >= interval {
                        return Ok(());
                    }
                    let chunk = self.pause_poll.min(interval - waited);
                    thread::sleep(chunk);
                    waited += chunk;
                }
                // The worker owns the phase until its final store; Idle here
                // means the run was torn down externally, treat as abort.
                RunPhase::Idle => return Err(RunInterrupt::Cancelled),
            }
        }
    }
}

fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
