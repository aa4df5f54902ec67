//! Default substitutions applied while normalizing decoded records.
//!
//! Every fallback the format defines lives here rather than inline at
//! the read sites, so the complete table is visible in one place:
//!
//! | field                    | condition            | substituted value        |
//! |--------------------------|----------------------|--------------------------|
//! | header scale             | denominator == 0     | 1.0                      |
//! | header layer count       | stored count == 0    | 16                       |
//! | header group count       | stored count == 0    | 16                       |
//! | layer name               | empty after trimming | `Layer {number}`         |
//! | text font name           | empty after trimming | `MS Gothic`              |
//! | dimension display text   | record length == 0   | value, two decimals      |

/// Effective layer/group table size when the stored count is 0.
pub const DEFAULT_TABLE_COUNT: u8 = 16;

/// Effective scale when the stored denominator is 0.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Font substituted for text records with an empty font field.
pub const DEFAULT_FONT: &str = "MS Gothic";

/// Effective table count for a stored layer or group count.
pub fn table_count(raw: u8) -> u8 {
    if raw == 0 {
        DEFAULT_TABLE_COUNT
    } else {
        raw
    }
}

/// Effective scale ratio for a stored numerator/denominator pair.
pub fn scale(numerator: i32, denominator: i32) -> f64 {
    if denominator == 0 {
        DEFAULT_SCALE
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Effective layer name: the trimmed stored name, or a synthesized one.
pub fn layer_name(stored: &str, number: u8) -> String {
    let trimmed = stored.trim();
    if trimmed.is_empty() {
        format!("Layer {number}")
    } else {
        trimmed.to_string()
    }
}

/// Effective font name for a text record.
pub fn font_name(stored: &str) -> String {
    let trimmed = stored.trim();
    if trimmed.is_empty() {
        DEFAULT_FONT.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Effective display text for a dimension record.
pub fn dimension_text(stored: String, value_mm: f64) -> String {
    if stored.is_empty() {
        format!("{value_mm:.2}")
    } else {
        stored
    }
}
