use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Errors raised when rescaling ingredient quantities
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScalingError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Leading quantity, optional whitespace, then the rest of the line
static QUANTITY_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*(\d+(?:\.\d+)?)\s*(.*)$").ok());

/// Ratio of requested servings to the baseline the catalog is written for
pub fn serving_factor(servings: u32, baseline: u32) -> Result<f64, ScalingError> {
    if servings == 0 {
        return Err(ScalingError::InvalidArgument(
            "servings must be a positive integer".to_string(),
        ));
    }
    if baseline == 0 {
        return Err(ScalingError::InvalidArgument(
            "baseline servings must be a positive integer".to_string(),
        ));
    }

    Ok(f64::from(servings) / f64::from(baseline))
}

/// Rescale the leading quantity of every ingredient line by `factor`
///
/// Lines without a leading integer or decimal quantity pass through
/// untouched, as do lines whose scaled quantity is not finite. Scaled
/// quantities are printed with at most two decimals: `{:.2}` formatting
/// (which rounds the exact binary value, ties to even, so `0.125` prints as
/// `0.12`) with trailing fractional zeros removed, so `4.00` becomes `4` and
/// `4.50` becomes `4.5`. Output keeps the length and order of the input.
pub fn scale_ingredients<S: AsRef<str>>(
    lines: &[S],
    factor: f64,
) -> Result<Vec<String>, ScalingError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ScalingError::InvalidArgument(format!(
            "serving factor must be positive, got {}",
            factor
        )));
    }

    Ok(lines
        .iter()
        .map(|line| scale_line(line.as_ref(), factor))
        .collect())
}

/// Rescale a single ingredient line
pub fn scale_line(line: &str, factor: f64) -> String {
    let Some(pattern) = QUANTITY_PATTERN.as_ref() else {
        return line.to_string();
    };
    let Some(caps) = pattern.captures(line) else {
        return line.to_string();
    };
    let Ok(quantity) = caps[1].parse::<f64>() else {
        return line.to_string();
    };

    let scaled = quantity * factor;
    if !scaled.is_finite() {
        return line.to_string();
    }

    format!("{} {}", format_quantity(scaled), &caps[2])
}

/// Two-decimal rendering with trailing fractional zeros stripped
pub fn format_quantity(quantity: f64) -> String {
    let fixed = format!("{:.2}", quantity);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}
