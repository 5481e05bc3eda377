//! Policy models and their per-year drift tables.

use crate::metrics::{Metric, MetricOp};

/// The election-cycle policy chosen at setup, immutable until restart.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolicyModel {
    /// "One Nation, One Election": simultaneous polls every five years.
    #[strum(serialize = "ONOE")]
    Onoe,
    /// Two election clusters every two and a half years.
    #[strum(serialize = "CLUSTER")]
    Cluster,
    /// Status quo: elections land whenever terms end.
    #[strum(serialize = "ROLLING")]
    Rolling,
}

impl PolicyModel {
    /// Automatic annual drift applied on every uneventful tick.
    ///
    /// CLUSTER deliberately has no automatic drift: its costs and benefits
    /// surface only through events.
    pub const fn drift(self) -> &'static [MetricOp] {
        match self {
            // Saves money and keeps governments seated, but voters are heard
            // only once in five years.
            PolicyModel::Onoe => &[
                MetricOp::Shift(Metric::Fiscal, 2),
                MetricOp::Shift(Metric::Stability, 2),
                MetricOp::Shift(Metric::Accountability, -3),
            ],
            PolicyModel::Cluster => &[],
            // Perpetual campaigning: expensive, MCC pauses work, but the
            // government stays on its toes.
            PolicyModel::Rolling => &[
                MetricOp::Shift(Metric::Fiscal, -3),
                MetricOp::Shift(Metric::Stability, -2),
                MetricOp::Shift(Metric::Accountability, 2),
            ],
        }
    }
}

bitflags::bitflags! {
    /// Set of policy models an event trigger applies to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ModelSet: u8 {
        const ONOE = 1 << 0;
        const CLUSTER = 1 << 1;
        const ROLLING = 1 << 2;
        const ANY = Self::ONOE.bits() | Self::CLUSTER.bits() | Self::ROLLING.bits();
    }
}

impl ModelSet {
    /// Whether this trigger set covers the given model.
    pub fn covers(self, model: PolicyModel) -> bool {
        self.contains(Self::from(model))
    }

    /// Number of models covered; fewer models means a more specific trigger.
    pub fn specificity(self) -> u32 {
        self.bits().count_ones()
    }
}

impl From<PolicyModel> for ModelSet {
    fn from(model: PolicyModel) -> Self {
        match model {
            PolicyModel::Onoe => ModelSet::ONOE,
            PolicyModel::Cluster => ModelSet::CLUSTER,
            PolicyModel::Rolling => ModelSet::ROLLING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn cluster_has_no_automatic_drift() {
        assert!(PolicyModel::Cluster.drift().is_empty());
    }

    #[test]
    fn any_covers_every_model() {
        for model in PolicyModel::iter() {
            assert!(ModelSet::ANY.covers(model));
        }
    }

    #[test]
    fn pair_triggers_are_less_specific_than_single() {
        let pair = ModelSet::CLUSTER | ModelSet::ROLLING;
        assert!(pair.specificity() > ModelSet::ONOE.specificity());
        assert!(pair.covers(PolicyModel::Rolling));
        assert!(!pair.covers(PolicyModel::Onoe));
    }

    #[test]
    fn display_matches_wire_names() {
        assert_eq!(PolicyModel::Onoe.to_string(), "ONOE");
        assert_eq!(PolicyModel::Rolling.to_string(), "ROLLING");
        assert_eq!("CLUSTER".parse::<PolicyModel>(), Ok(PolicyModel::Cluster));
    }
}
