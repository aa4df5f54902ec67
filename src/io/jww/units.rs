//! Fixed-point to real-unit conversions.
//!
//! The format stores lengths as signed 32-bit counts of hundredths of a
//! millimeter and angles as signed 16-bit whole degrees. Decoded
//! documents always carry real millimeters and radians; these are the
//! only places the two representations meet. Dimension records store
//! their measured value at a finer scale (thousandths of a millimeter).
//!
//! The inverse conversions have no use in the decode path (there is no
//! write path) but are kept for fabricating test inputs.

/// Stored length units per millimeter.
pub const LENGTH_UNITS_PER_MM: f64 = 100.0;

/// Stored dimension-value units per millimeter.
pub const DIM_VALUE_UNITS_PER_MM: f64 = 1000.0;

/// Convert a stored fixed-point length to millimeters.
pub fn length_to_mm(raw: i32) -> f64 {
    raw as f64 / LENGTH_UNITS_PER_MM
}

/// Convert millimeters to the stored fixed-point length.
pub fn mm_to_length(mm: f64) -> i32 {
    (mm * LENGTH_UNITS_PER_MM).round() as i32
}

/// Convert a stored line width (unsigned, hundredths-mm) to millimeters.
pub fn width_to_mm(raw: u16) -> f64 {
    raw as f64 / LENGTH_UNITS_PER_MM
}

/// Convert a stored fixed-point angle (whole degrees) to radians.
pub fn angle_to_radians(raw: i16) -> f64 {
    (raw as f64).to_radians()
}

/// Convert radians to the stored fixed-point angle.
pub fn radians_to_angle(radians: f64) -> i16 {
    radians.to_degrees().round() as i16
}

/// Convert a stored dimension value (thousandths-mm) to millimeters.
pub fn dim_value_to_mm(raw: i32) -> f64 {
    raw as f64 / DIM_VALUE_UNITS_PER_MM
}

/// Convert millimeters to the stored dimension value.
pub fn mm_to_dim_value(mm: f64) -> i32 {
    (mm * DIM_VALUE_UNITS_PER_MM).round() as i32
}
