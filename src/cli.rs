use clap::Parser;

/// Framewise silent-frame evaluation (PES/EPS) between a true source and a
/// predicted source.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Path to the true (reference) source WAV file, mono
    pub reference: String,

    /// Path to the predicted (estimated) source WAV file, mono
    pub estimate: String,

    /// Analysis window length in samples
    #[arg(short, long, default_value_t = 4096)]
    pub window_size: usize,

    /// Hop between consecutive frame starts in samples
    #[arg(short = 'H', long, default_value_t = 1024)]
    pub hop_size: usize,

    /// Evaluate the final frame even when it is shorter than the window
    #[arg(long)]
    pub eval_last_frame: bool,

    /// Skip EPS for frames where the true source is silent as well
    #[arg(long)]
    pub no_eps_for_silent_target: bool,

    /// Print per-frame framing diagnostics
    #[arg(long)]
    pub debug: bool,

    /// Write the evaluation results to this file as JSON
    #[arg(long)]
    pub json: Option<String>,
}
