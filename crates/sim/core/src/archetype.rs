//! End-of-run archetype classification.

use crate::metrics::Metrics;

/// The label summarizing a finished run, derived from final metrics.
///
/// Evaluation order is part of the contract: stability is checked first, then
/// accountability, with the pragmatist as the fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Archetype {
    EfficiencyAutocrat,
    ChaoticDemocrat,
    BalancedPragmatist,
}

impl Archetype {
    /// Nested-threshold classifier over the final metrics snapshot.
    pub fn classify(metrics: &Metrics) -> Self {
        if metrics.stability > 70 {
            Archetype::EfficiencyAutocrat
        } else if metrics.accountability > 70 {
            Archetype::ChaoticDemocrat
        } else {
            Archetype::BalancedPragmatist
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Archetype::EfficiencyAutocrat => "The Efficiency Autocrat",
            Archetype::ChaoticDemocrat => "The Chaotic Democrat",
            Archetype::BalancedPragmatist => "The Balanced Pragmatist",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Archetype::EfficiencyAutocrat => {
                "You built a highly efficient machine, but the people felt unheard \
                 during mid-term crises. You prioritized Output over Voice."
            }
            Archetype::ChaoticDemocrat => {
                "Development was slow and expensive, but the government was constantly \
                 on its toes. You prioritized Voice over Output."
            }
            Archetype::BalancedPragmatist => {
                "You traded away the extremes. Neither fully synchronized nor fully \
                 answerable, your era muddled through on compromise."
            }
        }
    }
}

/// Treasury verdict shown on the end screen, keyed off fiscal health.
pub fn treasury_label(metrics: &Metrics) -> &'static str {
    if metrics.fiscal > 50 {
        "+\u{20b9} 45,000 Cr"
    } else {
        "-\u{20b9} 15,000 Cr"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(stability: u8, accountability: u8) -> Metrics {
        Metrics {
            fiscal: 50,
            stability,
            accountability,
            federalism: 50,
        }
    }

    #[test]
    fn stability_threshold_wins_first() {
        assert_eq!(
            Archetype::classify(&metrics(71, 90)),
            Archetype::EfficiencyAutocrat
        );
    }

    #[test]
    fn accountability_checked_only_below_stability_threshold() {
        assert_eq!(
            Archetype::classify(&metrics(70, 71)),
            Archetype::ChaoticDemocrat
        );
    }

    #[test]
    fn fallback_is_the_pragmatist() {
        assert_eq!(
            Archetype::classify(&metrics(70, 70)),
            Archetype::BalancedPragmatist
        );
    }

    #[test]
    fn treasury_flips_above_midpoint_fiscal() {
        let mut m = metrics(50, 50);
        m.fiscal = 51;
        assert!(treasury_label(&m).starts_with('+'));
        m.fiscal = 50;
        assert!(treasury_label(&m).starts_with('-'));
    }
}
