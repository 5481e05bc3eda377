//! View state for the dividend and margin visualizer panels.

use sim_core::{
    BudgetLedger, CatalogItem, DividendError, ElectionRecord, GovernanceHeatmap, MarginReport,
    ReceiptBracket, RngOracle, TaxpayerReceipt,
};

/// Democracy Dividend panel: taxpayer receipt, budget game, heatmaps.
pub struct DividendPanel {
    /// Digits typed into the annual-income field.
    pub income_input: String,
    pub receipt: Option<TaxpayerReceipt>,
    pub ledger: BudgetLedger,
    pub catalog: Vec<CatalogItem>,
    pub brackets: Vec<ReceiptBracket>,
    pub selected: usize,
    pub staggered: GovernanceHeatmap,
    pub simultaneous: GovernanceHeatmap,
}

impl DividendPanel {
    /// Build the panel with the built-in civic data.
    ///
    /// The staggered heatmap is sampled once per panel from the oracle, so a
    /// fixed seed reproduces the same five-year freeze pattern.
    pub fn new(rng: &dyn RngOracle, seed: u64) -> Self {
        Self {
            income_input: String::new(),
            receipt: None,
            ledger: BudgetLedger::new(),
            catalog: sim_content::budget_catalog(),
            brackets: sim_content::receipt_brackets(),
            selected: 0,
            staggered: GovernanceHeatmap::staggered(rng, seed),
            simultaneous: GovernanceHeatmap::simultaneous(),
        }
    }

    /// Append a typed digit to the income field.
    pub fn push_digit(&mut self, digit: char) {
        // Ten digits already exceed any plausible annual income.
        if digit.is_ascii_digit() && self.income_input.len() < 10 {
            self.income_input.push(digit);
        }
    }

    pub fn pop_digit(&mut self) {
        self.income_input.pop();
    }

    /// Compute the receipt for the typed income. Empty input clears it.
    pub fn submit_income(&mut self) {
        self.receipt = self
            .income_input
            .parse::<u64>()
            .ok()
            .and_then(|income| TaxpayerReceipt::compute(income, &self.brackets));
    }

    pub fn select_next(&mut self) {
        if !self.catalog.is_empty() {
            self.selected = (self.selected + 1) % self.catalog.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.catalog.is_empty() {
            self.selected = (self.selected + self.catalog.len() - 1) % self.catalog.len();
        }
    }

    /// Buy one unit of the highlighted catalog item.
    pub fn buy_selected(&mut self) -> Result<(), DividendError> {
        match self.catalog.get(self.selected) {
            Some(item) => {
                let item = item.clone();
                self.ledger.buy(&item)
            }
            None => Ok(()),
        }
    }

    /// Reset the budget game to the opening wallet.
    pub fn reset_budget(&mut self) {
        self.ledger.reset();
    }
}

/// Margin of Error panel: non-voter projection over real-style records.
pub struct MarginPanel {
    pub records: Vec<ElectionRecord>,
    pub selected: usize,
    /// Mobilized share of non-voters, 0..=100, stepped by arrow keys.
    pub mobilized_percent: u8,
}

impl MarginPanel {
    pub fn new() -> Self {
        Self {
            records: sim_content::election_records(),
            selected: 0,
            mobilized_percent: 10,
        }
    }

    pub fn select_next(&mut self) {
        if !self.records.is_empty() {
            self.selected = (self.selected + 1) % self.records.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.records.is_empty() {
            self.selected = (self.selected + self.records.len() - 1) % self.records.len();
        }
    }

    pub fn raise_percent(&mut self) {
        self.mobilized_percent = (self.mobilized_percent + 5).min(100);
    }

    pub fn lower_percent(&mut self) {
        self.mobilized_percent = self.mobilized_percent.saturating_sub(5);
    }

    pub fn record(&self) -> Option<&ElectionRecord> {
        self.records.get(self.selected)
    }

    /// Projection for the highlighted record at the current slider value.
    pub fn report(&self) -> Option<MarginReport> {
        self.record()
            .map(|record| MarginReport::project(record, self.mobilized_percent))
    }
}

impl Default for MarginPanel {
    fn default() -> Self {
        Self::new()
    }
}
