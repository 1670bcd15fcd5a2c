//! Random offspring draws from two gamete pools.

use crate::cross::combine;
use crate::error::{Error, Result};
use crate::gamete::GametePool;
use crate::genotype::{Genotype, Phenotype};
use rand::prelude::*;
use rand_distr::Uniform;

/// Draws offspring by picking one gamete uniformly from each parent's pool.
///
/// Every draw is an independent trial (sampling with replacement).
pub struct Sampler<'a> {
    pool_a: &'a GametePool,
    pool_b: &'a GametePool,
    dist_a: Uniform<usize>,
    dist_b: Uniform<usize>,
}

impl<'a> Sampler<'a> {
    /// # Errors
    /// Returns [`Error::InvalidState`] if either pool is empty.
    pub fn new(pool_a: &'a GametePool, pool_b: &'a GametePool) -> Result<Self> {
        let dist_a = index_dist(pool_a, "first")?;
        let dist_b = index_dist(pool_b, "second")?;
        Ok(Self {
            pool_a,
            pool_b,
            dist_a,
            dist_b,
        })
    }

    pub fn draw_genotype<R: Rng + ?Sized>(&self, rng: &mut R) -> Genotype {
        let a = self.pool_a.as_slice()[self.dist_a.sample(rng)];
        let b = self.pool_b.as_slice()[self.dist_b.sample(rng)];
        combine(a, b)
    }

    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Phenotype {
        self.draw_genotype(rng).phenotype()
    }
}

fn index_dist(pool: &GametePool, parent: &str) -> Result<Uniform<usize>> {
    if pool.is_empty() {
        return Err(Error::invalid_state(format!(
            "{parent} parent has no gametes to draw from"
        )));
    }
    Uniform::new(0, pool.len())
        .map_err(|err| Error::invalid_state(format!("{parent} parent pool: {err}")))
}

/// Draw a single offspring phenotype.
pub fn draw_offspring<R: Rng + ?Sized>(
    pool_a: &GametePool,
    pool_b: &GametePool,
    rng: &mut R,
) -> Result<Phenotype> {
    Ok(Sampler::new(pool_a, pool_b)?.draw(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genotype::{Genotype, PhenotypeClass};
    use rand_chacha::ChaCha12Rng;

    fn pool(genotype: &str) -> GametePool {
        GametePool::of(&Genotype::parse(genotype).unwrap())
    }

    #[test]
    fn empty_pool_is_invalid_state() {
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        let err = draw_offspring(&GametePool::empty(), &pool("YyRr"), &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
        let err = draw_offspring(&pool("YyRr"), &GametePool::empty(), &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
    }

    #[test]
    fn pure_lines_always_give_the_same_offspring() {
        let mut rng = ChaCha12Rng::seed_from_u64(2);
        let (pool_a, pool_b) = (pool("YYRR"), pool("yyrr"));
        let sampler = Sampler::new(&pool_a, &pool_b).unwrap();
        for _ in 0..100 {
            assert_eq!(sampler.draw_genotype(&mut rng).to_string(), "YyRr");
        }
    }

    #[test]
    fn draws_only_produce_grid_genotypes() {
        let mut rng = ChaCha12Rng::seed_from_u64(3);
        let (pool_a, pool_b) = (pool("Yyrr"), pool("yyRr"));
        let grid = crate::cross::enumerate(&pool_a, &pool_b);
        let sampler = Sampler::new(&pool_a, &pool_b).unwrap();
        for _ in 0..200 {
            let genotype = sampler.draw_genotype(&mut rng);
            assert!(grid.cells().iter().any(|cell| cell.genotype == genotype));
        }
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let (pool_a, pool_b) = (pool("YyRr"), pool("YyRr"));
        let sampler = Sampler::new(&pool_a, &pool_b).unwrap();
        let run = |seed| {
            let mut rng = ChaCha12Rng::seed_from_u64(seed);
            (0..50)
                .map(|_| sampler.draw(&mut rng).class())
                .collect::<Vec<PhenotypeClass>>()
        };
        assert_eq!(run(7), run(7));
    }
}
