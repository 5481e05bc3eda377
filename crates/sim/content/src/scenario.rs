//! The standard fifteen-year scenario.
//!
//! Eight crisis events spanning the run, plus the headline pools the ticker
//! draws from. Trigger years and effect tables are the canonical campaign;
//! loaded scenarios (RON) can replace them wholesale.

use sim_core::{Choice, Event, HeadlinePools, Metric, MetricOp, ModelSet};

use MetricOp::{Set, Shift};

/// The eight canonical events. Build an `EventTable` from these; the standard
/// set is collision-free by construction and covered by tests.
pub fn standard_events() -> Vec<Event> {
    vec![
        // Frequent elections encourage horse-trading.
        Event {
            year: 2,
            trigger: ModelSet::ROLLING | ModelSet::CLUSTER,
            title: "Defection Drama".to_string(),
            description: "15 MLAs from the opposition want to switch sides ahead of the \
                          state polls. They demand ministerial berths."
                .to_string(),
            choices: [
                Choice::new(
                    "Accept Them",
                    vec![
                        Shift(Metric::Stability, 10),
                        Shift(Metric::Accountability, -15),
                        Shift(Metric::Fiscal, -5),
                    ],
                ),
                Choice::new(
                    "Reject Them",
                    vec![
                        Shift(Metric::Stability, -15),
                        Shift(Metric::Accountability, 10),
                    ],
                ),
            ],
        },
        // The classic accountability trap of synchronized polls.
        Event {
            year: 3,
            trigger: ModelSet::ONOE,
            title: "The Local Water Crisis".to_string(),
            description: "A severe drought hits Maharashtra. The state government is \
                          unpopular, but elections are 2 years away."
                .to_string(),
            choices: [
                Choice::new(
                    "Suppress Protests (Ignore)",
                    vec![
                        Shift(Metric::Stability, 5),
                        Shift(Metric::Accountability, -25),
                    ],
                ),
                Choice::new(
                    "Divert Central Funds",
                    vec![
                        Shift(Metric::Fiscal, -15),
                        Shift(Metric::Accountability, 5),
                    ],
                ),
            ],
        },
        Event {
            year: 4,
            trigger: ModelSet::ROLLING,
            title: "The By-Election Battle".to_string(),
            description: "Crucial by-elections in UP. The Prime Minister wants to \
                          campaign personally."
                .to_string(),
            choices: [
                Choice::new(
                    "PM Campaigns",
                    vec![
                        Shift(Metric::Stability, -15),
                        Shift(Metric::Accountability, 10),
                    ],
                ),
                Choice::new(
                    "Focus on Policy",
                    vec![
                        Shift(Metric::Stability, 5),
                        Shift(Metric::Accountability, -10),
                    ],
                ),
            ],
        },
        // A universal crisis testing priorities.
        Event {
            year: 5,
            trigger: ModelSet::ANY,
            title: "The Great Pandemic".to_string(),
            description: "A global virus outbreak requires immediate lockdown and funds. \
                          The economy is stalling."
                .to_string(),
            choices: [
                Choice::new(
                    "National Lockdown",
                    vec![
                        Shift(Metric::Fiscal, -25),
                        Shift(Metric::Accountability, 15),
                        Shift(Metric::Stability, 5),
                    ],
                ),
                Choice::new(
                    "Keep Economy Open",
                    vec![
                        Shift(Metric::Fiscal, 5),
                        Shift(Metric::Accountability, -30),
                        Shift(Metric::Stability, -10),
                    ],
                ),
            ],
        },
        Event {
            year: 7,
            trigger: ModelSet::ONOE,
            title: "Hung Assembly in 3 States".to_string(),
            description: "Coalitions collapse. No party has numbers. The next \
                          synchronized election is 3 years away."
                .to_string(),
            choices: [
                Choice::new(
                    "President's Rule",
                    vec![
                        Shift(Metric::Stability, 10),
                        Shift(Metric::Federalism, -30),
                        Set(Metric::Accountability, 0),
                    ],
                ),
                Choice::new(
                    "Fresh Snap Elections",
                    vec![
                        Shift(Metric::Stability, -30),
                        Shift(Metric::Accountability, 20),
                        Shift(Metric::Federalism, 10),
                    ],
                ),
            ],
        },
        // Tests federalism under a single national campaign.
        Event {
            year: 9,
            trigger: ModelSet::ONOE,
            title: "The National Wave".to_string(),
            description: "A charismatic National Leader is sweeping polls. Local state \
                          issues are being ignored in the campaign."
                .to_string(),
            choices: [
                Choice::new(
                    "Ride the Wave",
                    vec![
                        Shift(Metric::Stability, 15),
                        Shift(Metric::Federalism, -25),
                        Shift(Metric::Accountability, -5),
                    ],
                ),
                Choice::new(
                    "Empower State Leaders",
                    vec![
                        Shift(Metric::Stability, -5),
                        Shift(Metric::Federalism, 20),
                        Shift(Metric::Accountability, 10),
                    ],
                ),
            ],
        },
        Event {
            year: 11,
            trigger: ModelSet::CLUSTER | ModelSet::ROLLING,
            title: "Voter Fatigue Sets In".to_string(),
            description: "Voters are tired of constant campaigns every 6 months. \
                          Turnout is dropping."
                .to_string(),
            choices: [
                Choice::new(
                    "Mandatory Voting Law",
                    vec![
                        Shift(Metric::Accountability, -10),
                        Shift(Metric::Stability, 5),
                    ],
                ),
                Choice::new(
                    "Simultaneous State Polls",
                    vec![Shift(Metric::Stability, 10), Shift(Metric::Fiscal, 5)],
                ),
            ],
        },
        Event {
            year: 14,
            trigger: ModelSet::ONOE,
            title: "The Dictator's Shadow".to_string(),
            description: "With 14 years of uninterrupted stability, the ruling party \
                          has become extremely powerful and arrogant."
                .to_string(),
            choices: [
                Choice::new(
                    "Media Control Bill",
                    vec![
                        Shift(Metric::Stability, 20),
                        Shift(Metric::Accountability, -40),
                        Shift(Metric::Federalism, -10),
                    ],
                ),
                Choice::new(
                    "Citizen Townhalls",
                    vec![
                        Shift(Metric::Stability, -10),
                        Shift(Metric::Accountability, 30),
                    ],
                ),
            ],
        },
    ]
}

/// Headline pools for the cosmetic ticker.
pub fn standard_headlines() -> HeadlinePools {
    HeadlinePools {
        base: vec![
            "GDP grows by 7.5% as manufacturing picks up.".to_string(),
            "Opposition stages walkout in Parliament.".to_string(),
            "Supreme Court hears plea on electoral bonds.".to_string(),
            "New highway project mandated by Ministry.".to_string(),
            "Monsoon session begins with heated debates.".to_string(),
        ],
        steady: vec![
            "Zero election interruptions this year.".to_string(),
            "Government focuses on long-term reforms.".to_string(),
        ],
        disruption: vec![
            "Model Code of Conduct halts bridge construction.".to_string(),
            "PM cancels foreign trip for rallies.".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::{
        ChoiceOutcome, EventTable, PolicyModel, RngOracle, SimEngine, SimEnv, SimState,
        TickOutcome,
    };
    use strum::IntoEnumIterator;

    struct FixedRng;

    impl RngOracle for FixedRng {
        fn next_u32(&self, _seed: u64) -> u32 {
            0
        }
    }

    #[test]
    fn standard_table_validates_with_eight_events() {
        let table = EventTable::new(standard_events()).unwrap();
        assert_eq!(table.len(), 8);
    }

    #[test]
    fn canonical_triggers_resolve_as_documented() {
        let table = EventTable::new(standard_events()).unwrap();
        assert_eq!(
            table.lookup(3, PolicyModel::Onoe).unwrap().title,
            "The Local Water Crisis"
        );
        assert_eq!(
            table.lookup(2, PolicyModel::Rolling).unwrap().title,
            "Defection Drama"
        );
        assert_eq!(
            table.lookup(2, PolicyModel::Cluster).unwrap().title,
            "Defection Drama"
        );
        assert!(table.lookup(2, PolicyModel::Onoe).is_none());
        for model in PolicyModel::iter() {
            assert_eq!(
                table.lookup(5, model).unwrap().title,
                "The Great Pandemic"
            );
        }
    }

    #[test]
    fn at_most_one_event_per_year_and_model() {
        let table = EventTable::new(standard_events()).unwrap();
        for year in 1..=15 {
            for model in PolicyModel::iter() {
                let matches = table
                    .events()
                    .iter()
                    .filter(|e| e.year == year && e.trigger.covers(model))
                    .count();
                assert!(
                    matches <= 1,
                    "{matches} events for year {year} under {model}"
                );
            }
        }
    }

    #[test]
    fn every_event_offers_two_labeled_choices() {
        for event in standard_events() {
            for choice in &event.choices {
                assert!(!choice.label.is_empty());
                assert!(!choice.effects.is_empty());
            }
        }
    }

    #[test]
    fn rolling_defection_resolves_against_the_standard_table() {
        let events = EventTable::new(standard_events()).unwrap();
        let headlines = standard_headlines();
        let mut state = SimState::new();
        let mut engine = SimEngine::new(&mut state);
        engine.select_model(PolicyModel::Rolling).unwrap();

        let env = SimEnv {
            events: &events,
            headlines: &headlines,
            rng: &FixedRng,
            seed: 7,
        };
        assert!(matches!(
            engine.tick(&env).unwrap(),
            TickOutcome::Advanced { year: 2, .. }
        ));

        let TickOutcome::CrisisRaised(crisis) = engine.tick(&env).unwrap() else {
            panic!("expected the year-2 defection crisis");
        };
        assert_eq!(crisis.title, "Defection Drama");

        let outcome = engine.resolve_choice(1).unwrap();
        assert!(matches!(outcome, ChoiceOutcome::Resumed { year: 3, .. }));
        // 48 after year-1 drift, then -15 from rejecting the defectors.
        assert_eq!(state.metrics().stability, 33);
        assert_eq!(state.metrics().accountability, 62);
        assert_eq!(state.history()[0].to_string(), "Year 2: Reject Them");
    }

    #[test]
    fn headline_pools_are_populated_per_model() {
        let pools = standard_headlines();
        assert_eq!(pools.base.len(), 5);
        assert_eq!(pools.steady.len(), 2);
        assert_eq!(pools.disruption.len(), 2);
    }
}
