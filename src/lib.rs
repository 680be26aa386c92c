//! Observable sort-step engine.
//!
//! sortscope runs classic comparison sorts (bubble, selection, insertion,
//! quick, merge) as streams of discrete, observable mutation events rather
//! than opaque computations, and drives those streams through a pausable,
//! cancellable, speed-controlled scheduler that keeps a live view and live
//! comparison/swap counters synchronized with algorithm progress.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  Consumer (renderer, audio, controls)            │
//! │  └─ RunObserver callbacks + control surface      │
//! ├──────────────────────────────────────────────────┤
//! │  scheduler: phase machine, pacing, worker thread │
//! │  stats:     comparison/movement counting rule    │
//! │  sequence:  working model + step application     │
//! │  algorithms: the five step-producing variants    │
//! ├──────────────────────────────────────────────────┤
//! │  types: Step / DisplayState / RunState wire data │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Algorithms never touch rendering or timing: they describe mutations as
//! [`Step`]s, and the scheduler interprets them. Cancellation is a
//! cooperative flag observed at every suspension point and unwound through
//! arbitrary recursion depth as an explicit interrupt result.
//!
//! # Usage
//!
//! ```
//! use sortscope::generate::generate_sequence_seeded;
//! use sortscope::{AlgorithmKind, EngineConfig, RunOutcome, Scheduler};
//!
//! let scheduler = Scheduler::new(EngineConfig::default())?;
//! let sequence = generate_sequence_seeded(10, 42)?;
//! scheduler.start(AlgorithmKind::Quick, sequence, 100)?;
//! let report = scheduler.wait().expect("a run just finished");
//! assert_eq!(report.outcome, RunOutcome::Completed);
//! assert!(report.sequence.is_sorted());
//! # Ok::<(), sortscope::EngineError>(())
//! ```

#![forbid(unsafe_code)]

pub mod algorithms;
pub mod classify;
pub mod config;
pub mod error;
pub mod generate;
pub mod observer;
pub mod scheduler;
pub mod sequence;
pub mod stats;
pub mod tracing_config;
pub mod types;

pub use algorithms::{AlgorithmKind, StepBuffer, StepSink};
pub use classify::classify;
pub use config::{
    DEFAULT_PAUSE_POLL, DEFAULT_SPEED, EngineConfig, SPEED_MAX, SPEED_MIN, interval_for_speed,
};
pub use error::{EngineError, EngineResult, RunInterrupt};
pub use generate::{generate_sequence, generate_sequence_seeded};
pub use observer::{NullObserver, RunObserver, cue_frequency};
pub use scheduler::{RunReport, Scheduler};
pub use sequence::Sequence;
pub use stats::RunStats;
pub use types::{DisplayState, Element, RunOutcome, RunPhase, RunState, Step, StepKind};
