//! Stage-gated experiment: choose parents, verify gametes, then simulate.

use crate::cross::{Cross, PunnettGrid, enumerate, theoretical_ratios};
use crate::error::{Error, Result};
use crate::gamete::GametePool;
use crate::genotype::Genotype;
use crate::stats::{RatioTable, SimulationState};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ChoosingParents,
    VerifyingGametes,
    Simulating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    First,
    Second,
}

/// A single experiment holding at most one active cross.
#[derive(Debug, Clone)]
pub struct Experiment {
    stage: Stage,
    parent_1: Option<Genotype>,
    parent_2: Option<Genotype>,
    pool_1: GametePool,
    pool_2: GametePool,
    gametes_verified: bool,
    stats: SimulationState,
}

impl Default for Experiment {
    fn default() -> Self {
        Self::new()
    }
}

impl Experiment {
    pub fn new() -> Self {
        Self {
            stage: Stage::ChoosingParents,
            parent_1: None,
            parent_2: None,
            pool_1: GametePool::empty(),
            pool_2: GametePool::empty(),
            gametes_verified: false,
            stats: SimulationState::new(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn parent(&self, parent: Parent) -> Option<Genotype> {
        match parent {
            Parent::First => self.parent_1,
            Parent::Second => self.parent_2,
        }
    }

    pub fn gamete_pool(&self, parent: Parent) -> &GametePool {
        match parent {
            Parent::First => &self.pool_1,
            Parent::Second => &self.pool_2,
        }
    }

    /// The active cross, once both parents are chosen.
    pub fn cross(&self) -> Option<Cross> {
        Some(Cross::new(self.parent_1?, self.parent_2?))
    }

    pub fn gametes_verified(&self) -> bool {
        self.gametes_verified
    }

    pub fn stats(&self) -> &SimulationState {
        &self.stats
    }

    /// Empty while a parent is missing.
    pub fn punnett_grid(&self) -> PunnettGrid {
        enumerate(&self.pool_1, &self.pool_2)
    }

    /// Empty while a parent is missing.
    pub fn theoretical_ratios(&self) -> RatioTable {
        theoretical_ratios(&self.punnett_grid())
    }

    /// Put a genotype into the first empty parent slot.
    pub fn select_parent(&mut self, genotype: Genotype) -> Result<Parent> {
        self.expect_stage(Stage::ChoosingParents, "select a parent")?;
        let parent = match (self.parent_1, self.parent_2) {
            (None, _) => Parent::First,
            (Some(_), None) => Parent::Second,
            (Some(_), Some(_)) => {
                return Err(Error::invalid_state("both parents are already selected"));
            }
        };
        self.set_parent(parent, Some(genotype));
        log::debug!("selected {genotype} as {parent:?} parent");
        Ok(parent)
    }

    pub fn remove_parent(&mut self, parent: Parent) -> Result<()> {
        self.expect_stage(Stage::ChoosingParents, "remove a parent")?;
        self.set_parent(parent, None);
        Ok(())
    }

    fn set_parent(&mut self, parent: Parent, genotype: Option<Genotype>) {
        let pool = genotype.map_or_else(GametePool::empty, |g| GametePool::of(&g));
        match parent {
            Parent::First => {
                self.parent_1 = genotype;
                self.pool_1 = pool;
            }
            Parent::Second => {
                self.parent_2 = genotype;
                self.pool_2 = pool;
            }
        }
        self.gametes_verified = false;
        self.stats.reset();
    }

    /// Move on to gamete verification.
    pub fn confirm_parents(&mut self) -> Result<()> {
        self.expect_stage(Stage::ChoosingParents, "confirm parents")?;
        if self.cross().is_none() {
            return Err(Error::invalid_state("both parents must be selected"));
        }
        self.enter(Stage::VerifyingGametes);
        Ok(())
    }

    /// Check the claimed gamete sets of both parents.
    ///
    /// Returns a single verdict; a correct answer unlocks the simulation.
    pub fn check_gametes<S: AsRef<str>>(&mut self, guess_1: &[S], guess_2: &[S]) -> Result<bool> {
        self.expect_stage(Stage::VerifyingGametes, "check gametes")?;
        let correct = self.pool_1.verify(guess_1) && self.pool_2.verify(guess_2);
        log::debug!("gamete guess is {}", if correct { "correct" } else { "wrong" });
        self.gametes_verified = correct;
        Ok(correct)
    }

    pub fn start_simulation(&mut self) -> Result<()> {
        self.expect_stage(Stage::VerifyingGametes, "start the simulation")?;
        if !self.gametes_verified {
            return Err(Error::invalid_state("gametes have not been verified"));
        }
        self.enter(Stage::Simulating);
        Ok(())
    }

    /// Return to the previous stage.
    pub fn back(&mut self) -> Result<()> {
        let previous = match self.stage {
            Stage::ChoosingParents => {
                return Err(Error::invalid_state("already at the first stage"));
            }
            Stage::VerifyingGametes => {
                self.gametes_verified = false;
                Stage::ChoosingParents
            }
            Stage::Simulating => Stage::VerifyingGametes,
        };
        self.enter(previous);
        Ok(())
    }

    /// Drop both parents and every tally.
    pub fn restart(&mut self) {
        *self = Self::new();
        log::debug!("restarted experiment");
    }

    pub fn run_batch<R: Rng + ?Sized>(&mut self, n: u64, rng: &mut R) -> Result<()> {
        self.expect_stage(Stage::Simulating, "run a batch")?;
        self.stats.run_batch(&self.pool_1, &self.pool_2, n, rng)
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    fn enter(&mut self, stage: Stage) {
        log::debug!("{:?} -> {stage:?}", self.stage);
        self.stage = stage;
        self.stats.reset();
    }

    fn expect_stage(&self, stage: Stage, action: &str) -> Result<()> {
        if self.stage != stage {
            return Err(Error::invalid_state(format!(
                "cannot {action} while in {:?}, expected {stage:?}",
                self.stage
            )));
        }
        Ok(())
    }
}
