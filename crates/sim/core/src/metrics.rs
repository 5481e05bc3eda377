//! Bounded metric indicators and the shared apply-and-clamp primitive.
//!
//! Every mutation of [`Metrics`] flows through [`Metrics::apply`], which
//! clamps each field to `[MIN, MAX]`. Both the per-year drift path and the
//! event-choice path use the same primitive, so the bounds invariant holds
//! for arbitrary op sequences.

/// Enumerates the four tracked indicators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Treasury condition; elections and bailouts drain it.
    #[strum(serialize = "Fiscal Health")]
    Fiscal,
    /// Governance continuity; campaigns and crises erode it.
    #[strum(serialize = "Stability")]
    Stability,
    /// How answerable the government is to voters.
    #[strum(serialize = "Accountability")]
    Accountability,
    /// Centre-state balance of power. Hidden on the dashboard.
    #[strum(serialize = "Federalism")]
    Federalism,
}

/// A single mutation of one metric.
///
/// Choice effects and drift tables are plain data (`&[MetricOp]`), which makes
/// them pure functions of [`Metrics`] by construction: an op can read nothing
/// and can only shift or overwrite a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetricOp {
    /// Add a signed delta, clamped to the metric bounds.
    Shift(Metric, i16),
    /// Overwrite with an absolute value, clamped to the upper bound.
    Set(Metric, u8),
}

/// Snapshot of the four bounded indicators, each in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    pub fiscal: u8,
    pub stability: u8,
    pub accountability: u8,
    pub federalism: u8,
}

impl Metrics {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    /// Every run starts from the neutral midpoint.
    pub const INITIAL: Self = Self {
        fiscal: 50,
        stability: 50,
        accountability: 50,
        federalism: 50,
    };

    /// Read a single field.
    pub const fn get(&self, metric: Metric) -> u8 {
        match metric {
            Metric::Fiscal => self.fiscal,
            Metric::Stability => self.stability,
            Metric::Accountability => self.accountability,
            Metric::Federalism => self.federalism,
        }
    }

    /// Apply a sequence of ops, clamping after each mutation.
    ///
    /// This is the only mutation path; drift and event choices both route
    /// through it.
    pub fn apply(&mut self, ops: &[MetricOp]) {
        for op in ops {
            match *op {
                MetricOp::Shift(metric, delta) => {
                    let next = (self.get(metric) as i16 + delta)
                        .clamp(Self::MIN as i16, Self::MAX as i16) as u8;
                    self.set_field(metric, next);
                }
                MetricOp::Set(metric, value) => {
                    self.set_field(metric, value.min(Self::MAX));
                }
            }
        }
    }

    /// True when every field sits inside the documented bounds.
    ///
    /// `u8` storage already rules out negatives; this checks the upper bound.
    pub fn in_bounds(&self) -> bool {
        self.fiscal <= Self::MAX
            && self.stability <= Self::MAX
            && self.accountability <= Self::MAX
            && self.federalism <= Self::MAX
    }

    fn set_field(&mut self, metric: Metric, value: u8) {
        match metric {
            Metric::Fiscal => self.fiscal = value,
            Metric::Stability => self.stability = value,
            Metric::Accountability => self.accountability = value,
            Metric::Federalism => self.federalism = value,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_clamps_at_floor() {
        let mut metrics = Metrics::INITIAL;
        metrics.apply(&[MetricOp::Shift(Metric::Accountability, -75)]);
        assert_eq!(metrics.accountability, 0);
    }

    #[test]
    fn shift_clamps_at_cap() {
        let mut metrics = Metrics::INITIAL;
        metrics.apply(&[
            MetricOp::Shift(Metric::Stability, 40),
            MetricOp::Shift(Metric::Stability, 40),
        ]);
        assert_eq!(metrics.stability, 100);
    }

    #[test]
    fn set_overwrites_and_respects_cap() {
        let mut metrics = Metrics::INITIAL;
        metrics.apply(&[MetricOp::Set(Metric::Accountability, 0)]);
        assert_eq!(metrics.accountability, 0);
        metrics.apply(&[MetricOp::Set(Metric::Accountability, 200)]);
        assert_eq!(metrics.accountability, 100);
    }

    #[test]
    fn apply_keeps_every_field_in_bounds() {
        let mut metrics = Metrics::INITIAL;
        let ops = [
            MetricOp::Shift(Metric::Fiscal, -120),
            MetricOp::Shift(Metric::Stability, 120),
            MetricOp::Shift(Metric::Federalism, -1),
            MetricOp::Set(Metric::Accountability, 100),
        ];
        metrics.apply(&ops);
        assert!(metrics.in_bounds());
        assert_eq!(metrics.fiscal, 0);
        assert_eq!(metrics.stability, 100);
        assert_eq!(metrics.federalism, 49);
    }
}
