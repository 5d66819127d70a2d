//! Framewise silent-frame evaluation for source separation.
//!
//! Computes Predicted Energy at Silence (PES) and Energy at Predicted
//! Silence (EPS) between a true source signal and a predicted source
//! signal, as introduced for the evaluation of weakly informed audio
//! source separation. Both metrics slide a fixed window across the two
//! signals and measure leakage energy in frames where one of the signals
//! is completely silent.

pub mod evaluation;

pub use evaluation::{EvalError, EvalParams, FrameMetrics, eval_silent_frames, number_eval_frames};
