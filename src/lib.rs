//! Dihybrid Mendelian inheritance of pea seeds: seed color (`Y`/`y`) and
//! seed shape (`R`/`r`).
//!
//! The crate derives phenotypes from genotypes, enumerates the gametes a
//! parent produces, builds the Punnett square of a cross with its exact
//! phenotype ratios, and draws random offspring to tally observed ratios.
//!
//! ```
//! use rand::SeedableRng;
//!
//! let p1 = mendel::gamete_pool("YyRr").unwrap();
//! let p2 = mendel::gamete_pool("YyRr").unwrap();
//! let ratios = mendel::theoretical_ratios(&p1, &p2);
//! assert_eq!(ratios.get(mendel::genotype::PhenotypeClass::RoundYellow), Some(56.25));
//!
//! let mut rng = rand_chacha::ChaCha12Rng::seed_from_u64(1);
//! let mut state = mendel::reset_stats();
//! state.run_batch(&p1, &p2, 100, &mut rng).unwrap();
//! assert_eq!(state.total(), 100);
//! ```

pub mod cross;
pub mod error;
pub mod experiment;
pub mod gamete;
pub mod genotype;
pub mod sampler;
pub mod stats;

use crate::cross::PunnettGrid;
use crate::error::Result;
use crate::gamete::GametePool;
use crate::genotype::{Genotype, Phenotype};
use crate::stats::{RatioTable, SimulationState};
use rand::Rng;

pub fn phenotype_of(genotype: &str) -> Result<Phenotype> {
    genotype::parse_phenotype(genotype)
}

/// Canonically ordered gametes of a genotype, in two-symbol form.
pub fn gametes_of(genotype: &str) -> Result<Vec<String>> {
    gamete_pool(genotype).map(|pool| pool.to_strings())
}

pub fn gamete_pool(genotype: &str) -> Result<GametePool> {
    Genotype::parse(genotype).map(|genotype| gamete::gametes(&genotype))
}

pub fn punnett_grid(gametes_p1: &GametePool, gametes_p2: &GametePool) -> PunnettGrid {
    cross::enumerate(gametes_p1, gametes_p2)
}

pub fn theoretical_ratios(gametes_p1: &GametePool, gametes_p2: &GametePool) -> RatioTable {
    cross::theoretical_ratios(&punnett_grid(gametes_p1, gametes_p2))
}

/// One random offspring of the cross.
pub fn sample_offspring<R: Rng + ?Sized>(
    gametes_p1: &GametePool,
    gametes_p2: &GametePool,
    rng: &mut R,
) -> Result<Phenotype> {
    sampler::draw_offspring(gametes_p1, gametes_p2, rng)
}

pub fn accumulate(mut state: SimulationState, phenotype: Phenotype) -> SimulationState {
    state.accumulate(phenotype);
    state
}

pub fn reset_stats() -> SimulationState {
    SimulationState::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genotype::PhenotypeClass;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn functional_surface_round_trip() {
        assert_eq!(phenotype_of("Yyrr").unwrap().label(), "wrinkled-yellow");
        assert_eq!(gametes_of("YyRr").unwrap(), ["YR", "Yr", "yR", "yr"]);
        assert!(gametes_of("YyR").is_err());

        let p1 = gamete_pool("YyRr").unwrap();
        let p2 = gamete_pool("yyrr").unwrap();
        assert_eq!(punnett_grid(&p1, &p2).n_cells(), 4);
        assert_eq!(theoretical_ratios(&p1, &p2).get(PhenotypeClass::RoundGreen), Some(25.0));

        let mut rng = ChaCha12Rng::seed_from_u64(3);
        let mut state = reset_stats();
        for _ in 0..20 {
            state = accumulate(state, sample_offspring(&p1, &p2, &mut rng).unwrap());
        }
        assert_eq!(state.total(), 20);
        assert_eq!(state.counts().iter().sum::<u64>(), 20);
    }

    #[test]
    fn sampling_without_a_cross_is_rejected() {
        let mut rng = ChaCha12Rng::seed_from_u64(4);
        let p1 = gamete_pool("YyRr").unwrap();
        let result = sample_offspring(&p1, &GametePool::empty(), &mut rng);
        assert!(matches!(result, Err(error::Error::InvalidState(_))));
    }
}
