/// `part / whole` as a whole percent, rounded half up. An empty whole yields 0.
pub fn rounded_percent(part: usize, whole: usize) -> u32 {
    match whole {
        positive if positive > 0 => ((part as f64 / whole as f64) * 100.0).round() as u32,
        _ => 0,
    }
}

/// Progress towards a goal, clamped to `[0, 1]` for gauges
pub fn ratio(part: u32, goal: u32) -> f64 {
    match goal {
        positive if positive > 0 => (part as f64 / goal as f64).min(1.0),
        _ => 0.0,
    }
}
