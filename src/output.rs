pub fn fmt_frame(frame: usize, digits: usize) -> String {
    format!("{:0width$}", frame, width = digits)
}

pub fn sample_to_time(sample: usize, sample_rate: i32) -> String {
    let seconds = sample as f32 / sample_rate as f32;
    let hours = (seconds / 3600.0).floor();
    let minutes = ((seconds % 3600.0) / 60.0).floor();
    let secs = seconds % 60.0;
    format!("{:02.0}:{:02.0}:{:06.3}", hours, minutes, secs)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_to_time_formats_hms() {
        assert_eq!(sample_to_time(0, 44100), "00:00:00.000");
        assert_eq!(sample_to_time(44100, 44100), "00:00:01.000");
        assert_eq!(sample_to_time(44100 * 90, 44100), "00:01:30.000");
    }

    #[test]
    fn frame_labels_are_zero_padded() {
        assert_eq!(fmt_frame(7, 4), "0007");
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[-3.0, -5.0]), Some(-4.0));
    }
}
