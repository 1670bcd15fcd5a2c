//! Running offspring tallies and phenotype ratio tables.

use crate::error::Result;
use crate::gamete::GametePool;
use crate::genotype::{Phenotype, PhenotypeClass};
use crate::sampler::Sampler;
use rand::Rng;

/// Percentage of offspring per phenotype class.
///
/// Empty until there is something to tally, otherwise holds all four classes
/// (absent classes are 0) summing to 100.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatioTable {
    pct: Option<[f64; 4]>,
}

impl RatioTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from per-class counts indexed like [`PhenotypeClass::ALL`].
    pub fn from_counts(counts: &[u64; 4]) -> Self {
        let total: u64 = counts.iter().sum();
        if total == 0 {
            return Self::empty();
        }
        Self {
            pct: Some(counts.map(|count| 100.0 * count as f64 / total as f64)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pct.is_none()
    }

    pub fn get(&self, class: PhenotypeClass) -> Option<f64> {
        self.pct.map(|pct| pct[class.index()])
    }

    pub fn iter(&self) -> impl Iterator<Item = (PhenotypeClass, f64)> + '_ {
        self.pct
            .iter()
            .flat_map(|pct| PhenotypeClass::ALL.into_iter().zip(pct.iter().copied()))
    }

    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, pct)| pct).sum()
    }

    /// Largest absolute gap, in percentage points, between two tables.
    ///
    /// `None` if either table is empty.
    pub fn max_deviation(&self, other: &RatioTable) -> Option<f64> {
        let (a, b) = (self.pct?, other.pct?);
        Some(
            a.iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y).abs())
                .fold(0.0, f64::max),
        )
    }
}

/// Running offspring tallies of one experiment.
///
/// `total` always equals the sum of the class counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationState {
    total: u64,
    counts: [u64; 4],
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn count(&self, class: PhenotypeClass) -> u64 {
        self.counts[class.index()]
    }

    pub fn counts(&self) -> &[u64; 4] {
        &self.counts
    }

    /// Record a single offspring.
    pub fn accumulate(&mut self, phenotype: Phenotype) {
        self.counts[phenotype.class().index()] += 1;
        self.total += 1;
    }

    /// Draw `n` offspring and add them to the tallies.
    ///
    /// Pools are checked before any counter is touched, so a failed batch
    /// leaves the state unchanged.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::InvalidState`] if either pool is empty.
    pub fn run_batch<R: Rng + ?Sized>(
        &mut self,
        pool_a: &GametePool,
        pool_b: &GametePool,
        n: u64,
        rng: &mut R,
    ) -> Result<()> {
        let sampler = Sampler::new(pool_a, pool_b)?;

        let mut batch = [0; 4];
        for _ in 0..n {
            batch[sampler.draw(rng).class().index()] += 1;
        }

        for (count, added) in self.counts.iter_mut().zip(batch) {
            *count += added;
        }
        self.total += n;

        Ok(())
    }

    /// Zero every tally.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn observed_ratios(&self) -> RatioTable {
        RatioTable::from_counts(&self.counts)
    }
}
