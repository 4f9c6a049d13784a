/// Helpers shared by the conversion and folder modules.
use crate::constants::PROGRESS_SPINNER_TEMPLATE;
use indicatif::{ProgressBar, ProgressStyle};

/// Percentage by which `converted_size` is smaller than `original_size`.
///
/// Positive means the file shrank, negative means it grew. An empty original
/// reports 0.0 rather than dividing by zero.
pub fn calculate_reduction(original_size: u64, converted_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - converted_size as f64) / original_size as f64) * 100.0
}

/// Size in kilobytes with one decimal, e.g. `100.0KB`.
pub fn format_kb(bytes: u64) -> String {
    format!("{:.1}KB", bytes as f64 / 1024.0)
}

/// Spinner shown while a file is being encoded; hidden in quiet mode.
pub fn create_progress_spinner(message: &str) -> ProgressBar {
    if crate::logger::is_quiet() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(PROGRESS_SPINNER_TEMPLATE) {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_reduction() {
        assert_eq!(calculate_reduction(1000, 800), 20.0);
        assert_eq!(calculate_reduction(1000, 1200), -20.0);
        assert_eq!(calculate_reduction(1000, 1000), 0.0);
        assert_eq!(calculate_reduction(0, 500), 0.0);
    }

    #[test]
    fn test_format_kb() {
        assert_eq!(format_kb(0), "0.0KB");
        assert_eq!(format_kb(512), "0.5KB");
        assert_eq!(format_kb(1024), "1.0KB");
        assert_eq!(format_kb(102_400), "100.0KB");
        assert_eq!(format_kb(1536), "1.5KB");
    }
}
