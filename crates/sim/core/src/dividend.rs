//! Fiscal calculator models for the "democracy dividend" visualizers.
//!
//! Three small deterministic models: the taxpayer receipt (what one person's
//! income contributes to an election cycle), the budget ledger (what one
//! election cycle's cost could buy instead), and the MCC governance heatmap
//! (months of paused projects under staggered versus simultaneous polls).

use std::collections::BTreeMap;

use crate::rng::RngOracle;

/// An income bracket mapping to a per-election cost share in rupees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReceiptBracket {
    /// Upper bound (exclusive) on annual income; `None` is the open bracket.
    pub income_below: Option<u64>,
    /// Share of election cost attributed to this bracket, in rupees.
    pub share: u64,
}

/// A single taxpayer's election-cost receipt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaxpayerReceipt {
    /// Rupees of this person's taxes spent on one election cycle.
    pub share: u64,
    /// How many days of this person's income that share represents.
    pub days_of_income: u32,
}

impl TaxpayerReceipt {
    /// Days a citizen's money stays locked in campaign cycles under frequent
    /// elections; a fixed figure from the underlying cost study.
    pub const FREQUENT_ELECTION_LOCK_DAYS: u32 = 75;

    /// Compute the receipt for an annual income against ordered brackets.
    ///
    /// Brackets must be sorted by ascending bound with the open bracket last.
    /// Returns `None` for a zero income or when no bracket matches.
    pub fn compute(annual_income: u64, brackets: &[ReceiptBracket]) -> Option<Self> {
        if annual_income == 0 {
            return None;
        }
        let share = brackets
            .iter()
            .find(|b| b.income_below.is_none_or(|bound| annual_income < bound))
            .map(|b| b.share)?;
        let daily_income = annual_income as f64 / 365.0;
        let days_of_income = (share as f64 / daily_income).floor() as u32;
        Some(Self {
            share,
            days_of_income,
        })
    }
}

/// One purchasable item in the budget-builder catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    /// Cost in crores of rupees.
    pub cost: u64,
}

/// Budget calculator failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DividendError {
    #[error("item costs \u{20b9}{cost} Cr but only \u{20b9}{wallet} Cr remain")]
    InsufficientFunds { cost: u64, wallet: u64 },
}

/// Wallet seeded with the notional cost of one national election cycle;
/// purchases are tallied per catalog item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BudgetLedger {
    wallet: u64,
    purchases: BTreeMap<String, u32>,
}

impl BudgetLedger {
    /// Opening balance in crores: the cost of one national election cycle.
    pub const OPENING_WALLET: u64 = 60_000;

    pub fn new() -> Self {
        Self {
            wallet: Self::OPENING_WALLET,
            purchases: BTreeMap::new(),
        }
    }

    pub fn wallet(&self) -> u64 {
        self.wallet
    }

    pub fn can_afford(&self, item: &CatalogItem) -> bool {
        self.wallet >= item.cost
    }

    /// Buy one unit of `item`, debiting the wallet.
    pub fn buy(&mut self, item: &CatalogItem) -> Result<(), DividendError> {
        if !self.can_afford(item) {
            return Err(DividendError::InsufficientFunds {
                cost: item.cost,
                wallet: self.wallet,
            });
        }
        self.wallet -= item.cost;
        *self.purchases.entry(item.id.clone()).or_insert(0) += 1;
        Ok(())
    }

    /// Units bought of the given catalog item.
    pub fn count(&self, id: &str) -> u32 {
        self.purchases.get(id).copied().unwrap_or(0)
    }

    pub fn total_spent(&self) -> u64 {
        Self::OPENING_WALLET - self.wallet
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for BudgetLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Five-year grid of months frozen by the Model Code of Conduct.
///
/// Rebuilt from the run seed on demand; never serialized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GovernanceHeatmap {
    months: [bool; Self::MONTHS],
}

impl GovernanceHeatmap {
    pub const MONTHS: usize = 60;
    /// Probability (percent) that any given month freezes under staggered polls.
    pub const STAGGERED_FREEZE_PERCENT: u32 = 40;
    /// Months frozen under simultaneous elections: a single campaign window.
    pub const SIMULTANEOUS_FREEZE_MONTHS: usize = 5;
    /// Approximate working days lost per frozen month.
    pub const DAYS_PER_FROZEN_MONTH: u32 = 15;

    /// Staggered-election grid: each month independently frozen with 40%
    /// probability, drawn through the injected oracle so the grid replays.
    pub fn staggered(rng: &dyn RngOracle, seed: u64) -> Self {
        let mut months = [false; Self::MONTHS];
        for (index, month) in months.iter_mut().enumerate() {
            let draw = crate::rng::compute_seed(seed, index as u64, crate::rng::rng_stream::HEATMAP);
            *month = rng.chance(draw, Self::STAGGERED_FREEZE_PERCENT);
        }
        Self { months }
    }

    /// Simultaneous-election grid: only the opening campaign window freezes.
    pub fn simultaneous() -> Self {
        let mut months = [false; Self::MONTHS];
        for month in months.iter_mut().take(Self::SIMULTANEOUS_FREEZE_MONTHS) {
            *month = true;
        }
        Self { months }
    }

    pub fn months(&self) -> &[bool] {
        &self.months
    }

    pub fn frozen_months(&self) -> usize {
        self.months.iter().filter(|frozen| **frozen).count()
    }

    /// Approximate governance days lost across the five years.
    pub fn days_lost(&self) -> u32 {
        self.frozen_months() as u32 * Self::DAYS_PER_FROZEN_MONTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::testing::EchoRng;

    fn brackets() -> Vec<ReceiptBracket> {
        vec![
            ReceiptBracket {
                income_below: Some(500_000),
                share: 500,
            },
            ReceiptBracket {
                income_below: Some(1_000_000),
                share: 2_500,
            },
            ReceiptBracket {
                income_below: None,
                share: 15_000,
            },
        ]
    }

    #[test]
    fn receipt_brackets_match_the_cost_study() {
        let brackets = brackets();
        assert_eq!(
            TaxpayerReceipt::compute(300_000, &brackets).unwrap().share,
            500
        );
        assert_eq!(
            TaxpayerReceipt::compute(700_000, &brackets).unwrap().share,
            2_500
        );
        assert_eq!(
            TaxpayerReceipt::compute(2_000_000, &brackets).unwrap().share,
            15_000
        );
    }

    #[test]
    fn receipt_day_math_floors() {
        let brackets = brackets();
        // 700,000 / 365 ≈ 1917.8 per day; 2500 / 1917.8 ≈ 1.30 → 1 day.
        let receipt = TaxpayerReceipt::compute(700_000, &brackets).unwrap();
        assert_eq!(receipt.days_of_income, 1);
        // 300,000 / 365 ≈ 821.9; 500 / 821.9 ≈ 0.61 → 0 days.
        let receipt = TaxpayerReceipt::compute(300_000, &brackets).unwrap();
        assert_eq!(receipt.days_of_income, 0);
    }

    #[test]
    fn zero_income_has_no_receipt() {
        assert_eq!(TaxpayerReceipt::compute(0, &brackets()), None);
    }

    #[test]
    fn ledger_debits_and_tallies() {
        let school = CatalogItem {
            id: "school".to_string(),
            name: "Model School".to_string(),
            cost: 20,
        };
        let mut ledger = BudgetLedger::new();
        ledger.buy(&school).unwrap();
        ledger.buy(&school).unwrap();
        assert_eq!(ledger.count("school"), 2);
        assert_eq!(ledger.wallet(), BudgetLedger::OPENING_WALLET - 40);
        assert_eq!(ledger.total_spent(), 40);
    }

    #[test]
    fn ledger_rejects_overdraft() {
        let megaproject = CatalogItem {
            id: "mega".to_string(),
            name: "Everything".to_string(),
            cost: BudgetLedger::OPENING_WALLET + 1,
        };
        let mut ledger = BudgetLedger::new();
        assert!(matches!(
            ledger.buy(&megaproject),
            Err(DividendError::InsufficientFunds { .. })
        ));
        assert_eq!(ledger.wallet(), BudgetLedger::OPENING_WALLET);
    }

    #[test]
    fn simultaneous_grid_freezes_only_the_opening_window() {
        let grid = GovernanceHeatmap::simultaneous();
        assert_eq!(grid.frozen_months(), 5);
        assert_eq!(grid.days_lost(), 75);
        assert!(grid.months()[..5].iter().all(|m| *m));
        assert!(grid.months()[5..].iter().all(|m| !*m));
    }

    #[test]
    fn staggered_grid_is_reproducible_for_a_seed() {
        let a = GovernanceHeatmap::staggered(&EchoRng, 99);
        let b = GovernanceHeatmap::staggered(&EchoRng, 99);
        assert_eq!(a, b);
    }
}
