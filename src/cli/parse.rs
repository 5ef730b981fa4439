use graphwalk_core::graph::SearchStrategy;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Parse search algorithm from string
pub fn parse_strategy(s: &str) -> std::result::Result<SearchStrategy, String> {
    s.parse::<SearchStrategy>().map_err(|e| e.to_string())
}

/// Accept a bare level (case-insensitive) or a `target=level` directive
pub fn parse_log_level(s: &str) -> std::result::Result<String, String> {
    if s.contains('=') {
        return Ok(s.to_string());
    }
    let level = s.to_lowercase();
    if LOG_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(format!(
            "invalid log level: {} (expected: {})",
            s,
            LOG_LEVELS.join(", ")
        ))
    }
}

/// Parse a blocking probability in `0.0..=1.0`
pub fn parse_sparseness(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("invalid sparseness: {} (expected a number)", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("invalid sparseness: {} (expected 0.0 to 1.0)", s))
    }
}
