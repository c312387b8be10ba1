//! Demo cable sizing: load current, cross-section selection and voltage drop.
//!
//! The figures are indicative only and are not checked against any wiring standard.

pub mod ampacity;
pub mod current;
pub mod vdrop;

use std::ops::RangeInclusive;

use serde::Serialize;

pub use ampacity::{
    AMPACITY_TABLE, AmpacityRow, AmpacitySelection, SAFETY_MARGIN, select_cross_section,
};
pub use current::{Phases, estimate_current, single_phase_current, three_phase_current};
pub use vdrop::voltage_drop_percent;

pub const POWER_KW_RANGE: RangeInclusive<f64> = 0.0..=2000.0;
pub const VOLTAGE_V_RANGE: RangeInclusive<f64> = 12.0..=1000.0;
pub const POWER_FACTOR_RANGE: RangeInclusive<f64> = 0.1..=1.0;
pub const EFFICIENCY_RANGE: RangeInclusive<f64> = 0.1..=1.0;
pub const LENGTH_M_RANGE: RangeInclusive<f64> = 1.0..=5000.0;

pub const FORMULA_CAPTION: &str =
    "Formulas: I_mono=P/(U·pf·η), I_tri=P/(√3·U·pf·η), ΔU%≈I·(mV/A/m)·L/U·100";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SizingError {
    #[error("{field} = {value} is outside the supported range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unsupported phase count {0}, expected 1 or 3")]
    UnsupportedPhases(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CableInputs {
    pub phases: Phases,
    pub power_kw: f64,
    pub voltage_v: f64,
    pub power_factor: f64,
    pub efficiency: f64,
    pub length_m: f64,
}

impl CableInputs {
    /// Inputs with the calculator defaults for the given phase count.
    pub fn new(phases: Phases) -> Self {
        Self {
            phases,
            power_kw: 5.0,
            voltage_v: default_voltage(phases),
            power_factor: 0.9,
            efficiency: 1.0,
            length_m: 50.0,
        }
    }

    pub fn validate(&self) -> Result<(), SizingError> {
        check("power_kw", self.power_kw, &POWER_KW_RANGE)?;
        check("voltage_v", self.voltage_v, &VOLTAGE_V_RANGE)?;
        check("power_factor", self.power_factor, &POWER_FACTOR_RANGE)?;
        check("efficiency", self.efficiency, &EFFICIENCY_RANGE)?;
        check("length_m", self.length_m, &LENGTH_M_RANGE)?;
        Ok(())
    }
}

impl Default for CableInputs {
    fn default() -> Self {
        Self::new(Phases::Three)
    }
}

/// Nominal voltage offered for a phase count: 400 V three-phase, 230 V single-phase.
pub fn default_voltage(phases: Phases) -> f64 {
    match phases {
        Phases::Three => 400.0,
        Phases::Single => 230.0,
    }
}

fn check(field: &'static str, value: f64, range: &RangeInclusive<f64>) -> Result<(), SizingError> {
    // NaN fails `contains`, so non-finite input lands here too
    if value.is_finite() && range.contains(&value) {
        Ok(())
    } else {
        Err(SizingError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CableSizing {
    pub inputs: CableInputs,
    pub current_a: f64,
    pub selection: AmpacitySelection,
    pub voltage_drop_pct: f64,
}

impl CableSizing {
    pub fn csa_mm2(&self) -> f64 {
        self.selection.row().csa_mm2
    }

    pub fn mv_per_a_m(&self) -> f64 {
        self.selection.row().mv_per_a_m
    }
}

pub fn size_cable(inputs: &CableInputs) -> Result<CableSizing, SizingError> {
    inputs.validate()?;

    let current_a = estimate_current(
        inputs.phases,
        inputs.power_kw,
        inputs.voltage_v,
        inputs.power_factor,
        inputs.efficiency,
    );
    let selection = select_cross_section(current_a);
    let row = selection.row();
    let voltage_drop_pct =
        voltage_drop_percent(current_a, inputs.length_m, row.mv_per_a_m, inputs.voltage_v);

    tracing::debug!(
        phases = inputs.phases.count(),
        current_a,
        csa_mm2 = row.csa_mm2,
        voltage_drop_pct,
        "sized cable"
    );

    Ok(CableSizing {
        inputs: *inputs,
        current_a,
        selection,
        voltage_drop_pct,
    })
}
