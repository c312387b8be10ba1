/// Approximate voltage drop [%] over a cable run.
///
/// `dU% = (I * mV/A/m * L / 1000) / U * 100`. Not clamped; values above 100 are returned as is.
pub fn voltage_drop_percent(
    current_a: f64,
    length_m: f64,
    mv_per_a_m: f64,
    voltage_v: f64,
) -> f64 {
    (current_a * mv_per_a_m * length_m / 1000.0) / voltage_v * 100.0
}
