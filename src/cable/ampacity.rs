use serde::Serialize;

/// Required headroom between rated ampacity and estimated current.
pub const SAFETY_MARGIN: f64 = 1.25;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmpacityRow {
    pub csa_mm2: f64,
    pub rated_a: f64,
    pub mv_per_a_m: f64,
}

const fn row(csa_mm2: f64, rated_a: f64, mv_per_a_m: f64) -> AmpacityRow {
    AmpacityRow {
        csa_mm2,
        rated_a,
        mv_per_a_m,
    }
}

/// Demo ampacity table, ascending by cross-section.
pub const AMPACITY_TABLE: &[AmpacityRow] = &[
    row(1.5, 15.0, 29.0),
    row(2.5, 21.0, 18.0),
    row(4.0, 28.0, 11.0),
    row(6.0, 36.0, 7.3),
    row(10.0, 50.0, 4.4),
    row(16.0, 68.0, 2.8),
    row(25.0, 89.0, 1.75),
    row(35.0, 110.0, 1.25),
    row(50.0, 140.0, 0.93),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "row", rename_all = "snake_case")]
pub enum AmpacitySelection {
    /// Smallest row rated for the current plus margin.
    Rated(AmpacityRow),
    /// No row qualifies; the largest row is returned and the cable is undersized.
    BeyondTable(AmpacityRow),
}

impl AmpacitySelection {
    pub fn row(&self) -> &AmpacityRow {
        match self {
            AmpacitySelection::Rated(row) | AmpacitySelection::BeyondTable(row) => row,
        }
    }

    pub fn is_beyond_table(&self) -> bool {
        matches!(self, AmpacitySelection::BeyondTable(_))
    }
}

pub fn select_cross_section(current_a: f64) -> AmpacitySelection {
    select_from(AMPACITY_TABLE, current_a)
}

pub(crate) fn select_from(table: &[AmpacityRow], current_a: f64) -> AmpacitySelection {
    let required = SAFETY_MARGIN * current_a;
    match table.iter().find(|row| row.rated_a >= required) {
        Some(row) => AmpacitySelection::Rated(*row),
        None => {
            let largest = table.last().copied().unwrap_or(row(0.0, 0.0, 0.0));
            tracing::warn!(
                current_a,
                required_a = required,
                largest_rated_a = largest.rated_a,
                "current exceeds ampacity table; falling back to largest cross-section"
            );
            AmpacitySelection::BeyondTable(largest)
        }
    }
}
