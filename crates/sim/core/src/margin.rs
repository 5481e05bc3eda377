//! Margin-of-error math for the non-voter visualizer.

/// Vote tallies for one constituency.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElectionRecord {
    pub name: String,
    pub winner_votes: u64,
    pub runner_up_votes: u64,
    pub total_registered: u64,
    pub total_voted: u64,
}

impl ElectionRecord {
    pub fn margin(&self) -> u64 {
        self.winner_votes.saturating_sub(self.runner_up_votes)
    }

    pub fn non_voters(&self) -> u64 {
        self.total_registered.saturating_sub(self.total_voted)
    }
}

/// Projection of what a share of mobilized non-voters would have done.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarginReport {
    pub margin: u64,
    pub non_voters: u64,
    /// `floor(non_voters * percent / 100)` hypothetical new votes.
    pub projected_votes: u64,
    /// The result flips iff the projection strictly exceeds the margin.
    pub flips: bool,
    /// Votes beyond the margin when the result flips, zero otherwise.
    pub surplus: u64,
    /// How many times larger the non-voting bloc is than the margin,
    /// rounded to one decimal.
    pub power_ratio: f64,
}

impl MarginReport {
    /// Project `mobilized_percent`% of non-voters onto the runner-up.
    pub fn project(record: &ElectionRecord, mobilized_percent: u8) -> Self {
        let margin = record.margin();
        let non_voters = record.non_voters();
        let percent = u64::from(mobilized_percent.min(100));
        let projected_votes = non_voters * percent / 100;
        let flips = projected_votes > margin;
        let surplus = if flips { projected_votes - margin } else { 0 };
        let power_ratio = (non_voters as f64 / margin.max(1) as f64 * 10.0).round() / 10.0;
        Self {
            margin,
            non_voters,
            projected_votes,
            flips,
            surplus,
            power_ratio,
        }
    }

    /// Votes still missing when the result holds, zero once it flips.
    ///
    /// Flipping needs the projection to strictly exceed the margin, so an
    /// exact tie is still one vote short.
    pub fn shortfall(&self) -> u64 {
        if self.flips {
            0
        } else {
            self.margin + 1 - self.projected_votes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ElectionRecord {
        ElectionRecord {
            name: "Test Constituency".to_string(),
            winner_votes: 100_000,
            runner_up_votes: 95_000,
            total_registered: 400_000,
            total_voted: 250_000,
        }
    }

    #[test]
    fn projection_floors_the_mobilized_share() {
        let report = MarginReport::project(&record(), 3);
        assert_eq!(report.margin, 5_000);
        assert_eq!(report.non_voters, 150_000);
        assert_eq!(report.projected_votes, 4_500);
        assert!(!report.flips);
        assert_eq!(report.surplus, 0);
        assert_eq!(report.shortfall(), 501);
    }

    #[test]
    fn flip_requires_strictly_exceeding_the_margin() {
        let mut tied = record();
        // Exactly the margin: 5,000 projected from 5% of 100,000 non-voters.
        tied.total_registered = 350_000;
        let report = MarginReport::project(&tied, 5);
        assert_eq!(report.projected_votes, 5_000);
        assert!(!report.flips);
        assert_eq!(report.shortfall(), 1);

        let report = MarginReport::project(&record(), 4);
        assert_eq!(report.projected_votes, 6_000);
        assert!(report.flips);
        assert_eq!(report.surplus, 1_000);
        assert_eq!(report.shortfall(), 0);
    }

    #[test]
    fn power_ratio_rounds_to_one_decimal() {
        let report = MarginReport::project(&record(), 10);
        assert_eq!(report.power_ratio, 30.0);

        let odd = ElectionRecord {
            name: "Odd".to_string(),
            winner_votes: 10_000,
            runner_up_votes: 9_700,
            total_registered: 21_000,
            total_voted: 20_000,
        };
        // 1000 / 300 = 3.333... → 3.3
        assert_eq!(MarginReport::project(&odd, 1).power_ratio, 3.3);
    }

    #[test]
    fn zero_margin_does_not_divide_by_zero() {
        let tie = ElectionRecord {
            name: "Tie".to_string(),
            winner_votes: 10_000,
            runner_up_votes: 10_000,
            total_registered: 30_000,
            total_voted: 20_000,
        };
        let report = MarginReport::project(&tie, 1);
        assert_eq!(report.margin, 0);
        assert!(report.projected_votes > 0);
        assert!(report.flips);
    }
}
