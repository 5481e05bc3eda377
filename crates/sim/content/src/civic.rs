//! Static data for the fiscal and margin visualizers.

use sim_core::{CatalogItem, ElectionRecord, ReceiptBracket};

/// Budget-builder catalog: what one election cycle's cost buys instead.
/// Costs in crores of rupees.
pub fn budget_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: "aiims".to_string(),
            name: "AIIMS Hospital".to_string(),
            cost: 1_500,
        },
        CatalogItem {
            id: "vande".to_string(),
            name: "Vande Bharat Train".to_string(),
            cost: 115,
        },
        CatalogItem {
            id: "school".to_string(),
            name: "Model School".to_string(),
            cost: 20,
        },
        CatalogItem {
            id: "highway".to_string(),
            name: "10km Expressway".to_string(),
            cost: 150,
        },
    ]
}

/// Income brackets for the taxpayer receipt, shares in rupees.
pub fn receipt_brackets() -> Vec<ReceiptBracket> {
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

/// Bundled constituency dataset for the margin visualizer.
///
/// Representative, clearly fictional constituencies shaped like the real
/// data: margins small relative to the non-voting bloc.
pub fn election_records() -> Vec<ElectionRecord> {
    vec![
        ElectionRecord {
            name: "Chandrapur East".to_string(),
            winner_votes: 412_338,
            runner_up_votes: 409_121,
            total_registered: 1_642_700,
            total_voted: 1_018_474,
        },
        ElectionRecord {
            name: "Kaveripatnam".to_string(),
            winner_votes: 538_904,
            runner_up_votes: 537_286,
            total_registered: 1_874_310,
            total_voted: 1_301_255,
        },
        ElectionRecord {
            name: "Raigarh North".to_string(),
            winner_votes: 301_552,
            runner_up_votes: 289_844,
            total_registered: 1_210_966,
            total_voted: 724_190,
        },
        ElectionRecord {
            name: "Suryanagar".to_string(),
            winner_votes: 623_411,
            runner_up_votes: 601_730,
            total_registered: 2_015_482,
            total_voted: 1_427_602,
        },
        ElectionRecord {
            name: "Bhimtal West".to_string(),
            winner_votes: 198_276,
            runner_up_votes: 197_902,
            total_registered: 903_118,
            total_voted: 501_334,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::{BudgetLedger, MarginReport, TaxpayerReceipt};

    #[test]
    fn catalog_matches_the_published_costs() {
        let catalog = budget_catalog();
        let costs: Vec<(&str, u64)> = catalog
            .iter()
            .map(|item| (item.id.as_str(), item.cost))
            .collect();
        assert_eq!(
            costs,
            [
                ("aiims", 1_500),
                ("vande", 115),
                ("school", 20),
                ("highway", 150)
            ]
        );
    }

    #[test]
    fn wallet_covers_the_full_catalog_many_times_over() {
        let catalog = budget_catalog();
        let mut ledger = BudgetLedger::new();
        for item in &catalog {
            ledger.buy(item).unwrap();
        }
        assert!(ledger.wallet() > 0);
    }

    #[test]
    fn brackets_are_ordered_with_an_open_tail() {
        let brackets = receipt_brackets();
        assert!(brackets.last().unwrap().income_below.is_none());
        let receipt = TaxpayerReceipt::compute(450_000, &brackets).unwrap();
        assert_eq!(receipt.share, 500);
    }

    #[test]
    fn bundled_records_have_outsized_non_voter_blocs() {
        for record in election_records() {
            let report = MarginReport::project(&record, 10);
            assert!(record.margin() > 0);
            assert!(
                report.power_ratio > 1.0,
                "{} should have more non-voters than margin",
                record.name
            );
        }
    }
}
