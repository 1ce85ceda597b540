//! Similarity score formatting

/// Format a similarity score in `[0, 1]` as a whole percentage.
///
/// Rounds half up, so `0.125` is `"13%"` and `0.999` is `"100%"`. An absent
/// or non-finite score is `"N/A"`.
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(score) if score.is_finite() => {
            let percent = (score * 100.0 + 0.5).floor() as i64;
            format!("{percent}%")
        }
        _ => "N/A".to_string(),
    }
}
