//! Report formatting utilities for terminal output

/// A bar for a 0-100 progress value
pub fn format_progress_bar(percent: f64, width: usize) -> String {
    if percent <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((percent.min(100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate to `max_chars` characters, ending with "..." when cut
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        ".".repeat(max_chars)
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(format_progress_bar(0.0, 4), "░░░░");
        assert_eq!(format_progress_bar(50.0, 4), "██░░");
        assert_eq!(format_progress_bar(250.0, 4), "████");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("Şantiye", 10), "Şantiye");
        assert_eq!(truncate("Güneşli Vadi Konutları", 10), "Güneşli...");
        assert_eq!(truncate("Çok", 2), "..");
    }
}
