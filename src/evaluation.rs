//! Framewise PES/EPS computation.
//!
//! [`eval_silent_frames`] enumerates analysis frames over two equal-length
//! signals. For each frame it classifies each window as silent or not and
//! accumulates the two metrics:
//!
//! * PES, Predicted Energy at Silence: decibel energy of the predicted
//!   window wherever the true window is silent.
//! * EPS, Energy at Predicted Silence: decibel energy of the true window
//!   wherever the predicted window is silent.
//!
//! A window counts as silent only when the sum of absolute sample values is
//! exactly zero. This is a strict equality test, not a threshold: a window
//! holding any nonzero residual, however small, is not silent.

use serde::Serialize;
use thiserror::Error;

/// Floor added to the window energy before taking the logarithm, so that an
/// all-zero window reports -120 dB instead of a domain error.
const ENERGY_FLOOR: f64 = 1e-12;

/// Input validation failures for [`eval_silent_frames`].
///
/// These are the only ways the evaluation can fail; with validated inputs
/// the arithmetic is total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("true source and predicted source must have the same length ({true_len} != {predicted_len})")]
    LengthMismatch { true_len: usize, predicted_len: usize },
    #[error("window size must be a positive number of samples")]
    ZeroWindowSize,
    #[error("hop size must be a positive number of samples")]
    ZeroHopSize,
}

/// Framing parameters and policy flags for [`eval_silent_frames`].
#[derive(Debug, Clone)]
pub struct EvalParams {
    /// Length (in samples) of the analysis window.
    pub window_size: usize,
    /// Hop (in samples) between consecutive frame starts.
    pub hop_size: usize,
    /// Evaluate the final frame even when it is shorter than the window.
    pub eval_last_frame: bool,
    /// Report EPS also for frames where the true source is silent as well.
    /// Set to false for the exact behaviour described in the paper
    /// "Weakly Informed Audio Source Separation".
    pub eps_for_silent_target: bool,
}

impl EvalParams {
    /// Parameters with the default policy flags: the incomplete last frame
    /// is skipped, and EPS is reported even for a silent target.
    pub fn new(window_size: usize, hop_size: usize) -> Self {
        Self {
            window_size,
            hop_size,
            eval_last_frame: false,
            eps_for_silent_target: true,
        }
    }
}

/// Result of one evaluation pass.
///
/// `pes` is paired with `silent_true_source_frames` and `eps` with
/// `silent_prediction_frames`: entry `i` of the metric was measured at the
/// frame index stored at entry `i` of the matching list. Both index lists
/// are strictly ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameMetrics {
    pub pes: Vec<f64>,
    pub eps: Vec<f64>,
    pub silent_true_source_frames: Vec<usize>,
    pub silent_prediction_frames: Vec<usize>,
}

/// Number of evaluation frames for a signal: `ceil((len - window) / hop) + 1`.
///
/// The count includes one final frame that may extend past, or stop short
/// of, the last sample. For signals shorter than the window the ceiling is
/// taken over a negative numerator and the count can drop to zero.
pub fn number_eval_frames(signal_len: usize, window_size: usize, hop_size: usize) -> usize {
    if signal_len >= window_size {
        (signal_len - window_size).div_ceil(hop_size) + 1
    } else {
        // ceil of the negative numerator rounds towards zero
        1usize.saturating_sub((window_size - signal_len) / hop_size)
    }
}

/// Evaluates PES and EPS over all analysis frames of the two signals.
///
/// The signals must have the same length; `window_size` and `hop_size` must
/// be nonzero. The final frame is a boundary case whenever the signal
/// length is not a multiple of `hop_size`: it is skipped unless
/// `eval_last_frame` is set, in which case the shorter tail slice is
/// evaluated as-is.
pub fn eval_silent_frames(
    true_source: &[f64],
    predicted_source: &[f64],
    params: &EvalParams,
) -> Result<FrameMetrics, EvalError> {
    if true_source.len() != predicted_source.len() {
        return Err(EvalError::LengthMismatch {
            true_len: true_source.len(),
            predicted_len: predicted_source.len(),
        });
    }
    if params.window_size == 0 {
        return Err(EvalError::ZeroWindowSize);
    }
    if params.hop_size == 0 {
        return Err(EvalError::ZeroHopSize);
    }

    let len = true_source.len();
    let frames = number_eval_frames(len, params.window_size, params.hop_size);
    let last_frame_incomplete = len % params.hop_size != 0;

    let mut metrics = FrameMetrics::default();

    for n in 0..frames {
        let start = n * params.hop_size;

        let (true_window, prediction_window) = if n == frames - 1 && last_frame_incomplete {
            if !params.eval_last_frame {
                continue;
            }
            let start = start.min(len);
            (&true_source[start..], &predicted_source[start..])
        } else {
            // The final full frame may reach past the signal when the
            // length divides the hop but not the window; clamp like the
            // reference slicing does.
            let end = (start + params.window_size).min(len);
            (&true_source[start..end], &predicted_source[start..end])
        };

        if sum_abs(true_window) == 0.0 {
            metrics.pes.push(db_energy(prediction_window));
            metrics.silent_true_source_frames.push(n);
        }

        if sum_abs(prediction_window) == 0.0
            && (params.eps_for_silent_target || sum_abs(true_window) != 0.0)
        {
            metrics.eps.push(db_energy(true_window));
            metrics.silent_prediction_frames.push(n);
        }
    }

    Ok(metrics)
}

fn sum_abs(window: &[f64]) -> f64 {
    window.iter().map(|s| s.abs()).sum()
}

fn db_energy(window: &[f64]) -> f64 {
    let energy: f64 = window.iter().map(|s| s * s).sum();
    10.0 * (energy + ENERGY_FLOOR).log10()
}
