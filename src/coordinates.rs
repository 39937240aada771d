//! Degrees/minutes/seconds to signed decimal degrees.

/// Converts a DMS triple plus hemisphere reference (`N`, `S`, `E`, `W`) into
/// decimal degrees.
///
/// Exactly `"S"` or `"W"` negates the result. Any other reference, including
/// lowercase letters, full words or an empty string, leaves the value
/// positive. No range checks are applied to the components. A zero position
/// is always `0.0`, never `-0.0`.
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64, reference: &str) -> f64 {
    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    if decimal != 0.0 && matches!(reference, "S" | "W") {
        -decimal
    } else {
        decimal
    }
}
