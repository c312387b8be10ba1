use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phases {
    Single,
    Three,
}

impl Phases {
    pub fn count(self) -> u8 {
        match self {
            Phases::Single => 1,
            Phases::Three => 3,
        }
    }
}

impl TryFrom<u8> for Phases {
    type Error = super::SizingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Phases::Single),
            3 => Ok(Phases::Three),
            other => Err(super::SizingError::UnsupportedPhases(other)),
        }
    }
}

/// Line current [A] of a three-phase load.
///
/// `I = (P * 1000) / (sqrt(3) * U * pf * eta)`
pub fn three_phase_current(
    power_kw: f64,
    voltage_v: f64,
    power_factor: f64,
    efficiency: f64,
) -> f64 {
    (power_kw * 1000.0) / (3f64.sqrt() * voltage_v * power_factor * efficiency)
}

/// Current [A] of a single-phase load.
///
/// `I = (P * 1000) / (U * pf * eta)`
pub fn single_phase_current(
    power_kw: f64,
    voltage_v: f64,
    power_factor: f64,
    efficiency: f64,
) -> f64 {
    (power_kw * 1000.0) / (voltage_v * power_factor * efficiency)
}

pub fn estimate_current(
    phases: Phases,
    power_kw: f64,
    voltage_v: f64,
    power_factor: f64,
    efficiency: f64,
) -> f64 {
    match phases {
        Phases::Three => three_phase_current(power_kw, voltage_v, power_factor, efficiency),
        Phases::Single => single_phase_current(power_kw, voltage_v, power_factor, efficiency),
    }
}
