//! Cosmetic headline generation for the news ticker.

use crate::model::PolicyModel;
use crate::rng::RngOracle;

/// Per-model phrase pools for ticker headlines.
///
/// A base pool is shared by all models; ONOE appends its "no interruptions"
/// phrases while CLUSTER and ROLLING append campaign-disruption phrases.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeadlinePools {
    pub base: Vec<String>,
    /// Extra phrases for the synchronized-election model.
    pub steady: Vec<String>,
    /// Extra phrases for models with frequent campaigns.
    pub disruption: Vec<String>,
}

impl HeadlinePools {
    /// Deterministically pick one headline for the given model.
    ///
    /// Returns `None` when every applicable pool is empty.
    pub fn pick(&self, model: PolicyModel, rng: &dyn RngOracle, seed: u64) -> Option<&str> {
        let extra = match model {
            PolicyModel::Onoe => &self.steady,
            PolicyModel::Cluster | PolicyModel::Rolling => &self.disruption,
        };
        let len = self.base.len() + extra.len();
        let index = rng.pick_index(seed, len)?;
        let headline = if index < self.base.len() {
            &self.base[index]
        } else {
            &extra[index - self.base.len()]
        };
        Some(headline.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::testing::EchoRng;

    fn pools() -> HeadlinePools {
        HeadlinePools {
            base: vec!["base one".into(), "base two".into()],
            steady: vec!["quiet year".into()],
            disruption: vec!["mcc halts work".into()],
        }
    }

    #[test]
    fn pick_spans_base_and_model_pool() {
        let pools = pools();
        // EchoRng returns the seed, so seed 2 indexes past the base pool.
        assert_eq!(pools.pick(PolicyModel::Onoe, &EchoRng, 2), Some("quiet year"));
        assert_eq!(
            pools.pick(PolicyModel::Rolling, &EchoRng, 2),
            Some("mcc halts work")
        );
        assert_eq!(pools.pick(PolicyModel::Onoe, &EchoRng, 0), Some("base one"));
    }

    #[test]
    fn same_seed_reproduces_the_same_headline() {
        let pools = pools();
        assert_eq!(
            pools.pick(PolicyModel::Cluster, &EchoRng, 7),
            pools.pick(PolicyModel::Cluster, &EchoRng, 7)
        );
    }

    #[test]
    fn empty_pools_yield_nothing() {
        let pools = HeadlinePools::default();
        assert_eq!(pools.pick(PolicyModel::Onoe, &EchoRng, 3), None);
    }
}
