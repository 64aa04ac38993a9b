/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// "1 día" / "N días"
pub fn day_word(n: u32) -> &'static str {
    if n == 1 { "día" } else { "días" }
}

/// Face for a happiness level, used by both CLI and TUI.
pub fn happiness_face(level: u8) -> &'static str {
    match level {
        0..=19 => "(;_;)",
        20..=49 => "(._.)",
        50..=79 => "(^_^)",
        80..=99 => "(^o^)",
        _ => "(\\^o^/)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_handles_zero_total() {
        assert_eq!(progress_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn bar_clamps_overfill() {
        assert_eq!(progress_bar(9, 4, 4), "████");
        assert_eq!(progress_bar(2, 4, 4), "██░░");
    }

    #[test]
    fn day_word_pluralizes() {
        assert_eq!(day_word(1), "día");
        assert_eq!(day_word(0), "días");
        assert_eq!(day_word(7), "días");
    }
}
