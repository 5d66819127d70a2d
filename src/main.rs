mod cli;
mod json;
mod output;

use clap::Parser;
use std::process::ExitCode;
use wavers::{Wav, WaversResult};

use silentframes::{EvalParams, eval_silent_frames, number_eval_frames};

use cli::Cli;
use output::{fmt_frame, mean, sample_to_time};

fn read_mono(path: &str) -> Option<(Vec<f64>, i32)> {
    let Ok(mut wav): WaversResult<Wav<f64>> = Wav::from_path(path) else {
        println!("Could not open file: {}", path);
        return None;
    };

    if wav.n_channels() != 1 {
        println!(
            "{}: expected a mono file, got {} channels",
            path,
            wav.n_channels()
        );
        return None;
    }

    let (_, spec) = wav.wav_spec();
    let sample_rate = spec.fmt_chunk.sample_rate;

    let Ok(samples) = wav.read() else {
        println!("Could not read samples from: {}", path);
        return None;
    };

    Some((samples.to_vec(), sample_rate))
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let Some((true_source, reference_rate)) = read_mono(&args.reference) else {
        return ExitCode::from(1);
    };
    let Some((predicted_source, estimate_rate)) = read_mono(&args.estimate) else {
        return ExitCode::from(1);
    };

    if reference_rate != estimate_rate {
        println!(
            "Sample rates differ: {} vs {}, resample before evaluating",
            reference_rate, estimate_rate
        );
        return ExitCode::from(1);
    }

    println!("[+] sample rate:      {}", reference_rate);
    println!("[+] total samples:    {}", true_source.len());
    println!("[+] window size:      {}", args.window_size);
    println!("[+] hop size:         {}", args.hop_size);

    let params = EvalParams {
        window_size: args.window_size,
        hop_size: args.hop_size,
        eval_last_frame: args.eval_last_frame,
        eps_for_silent_target: !args.no_eps_for_silent_target,
    };

    let metrics = match eval_silent_frames(&true_source, &predicted_source, &params) {
        Ok(metrics) => metrics,
        Err(err) => {
            println!("Evaluation failed: {}", err);
            return ExitCode::from(2);
        }
    };

    let num_frames = number_eval_frames(true_source.len(), params.window_size, params.hop_size);
    if args.debug {
        println!("[+] frames:           {}", num_frames);
        println!(
            "[+] incomplete tail:  {}",
            true_source.len() % params.hop_size != 0
        );
    }

    let digits = num_frames.to_string().len();

    for (n, pes) in metrics
        .silent_true_source_frames
        .iter()
        .zip(metrics.pes.iter())
    {
        println!(
            "[{}] PES : {:.3} dB @ {}",
            fmt_frame(*n, digits),
            pes,
            sample_to_time(n * params.hop_size, reference_rate)
        );
    }

    for (n, eps) in metrics
        .silent_prediction_frames
        .iter()
        .zip(metrics.eps.iter())
    {
        println!(
            "[{}] EPS : {:.3} dB @ {}",
            fmt_frame(*n, digits),
            eps,
            sample_to_time(n * params.hop_size, reference_rate)
        );
    }

    println!(
        "[+] silent true-source frames: {}",
        metrics.silent_true_source_frames.len()
    );
    if let Some(value) = mean(&metrics.pes) {
        println!("[+] mean PES:                  {:.3} dB", value);
    }
    println!(
        "[+] silent prediction frames:  {}",
        metrics.silent_prediction_frames.len()
    );
    if let Some(value) = mean(&metrics.eps) {
        println!("[+] mean EPS:                  {:.3} dB", value);
    }

    json::write_json(&args, &params, &metrics);

    ExitCode::SUCCESS
}
