use serde_json::to_string_pretty;

use silentframes::{EvalParams, FrameMetrics};

use crate::cli::Cli;

pub fn write_json(args: &Cli, params: &EvalParams, metrics: &FrameMetrics) {
    let Some(path) = args.json.as_ref() else {
        return;
    };

    let json_value = serde_json::json!({
        "windowSize": params.window_size,
        "hopSize": params.hop_size,
        "evalLastFrame": params.eval_last_frame,
        "epsForSilentTarget": params.eps_for_silent_target,
        "results": metrics,
    });

    std::fs::write(path, to_string_pretty(&json_value).unwrap())
        .expect("Could not write JSON output to file");

    println!("Wrote JSON output to {}", path);
}
