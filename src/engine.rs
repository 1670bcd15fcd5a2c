use crate::analysis::Report;
use crate::config::Config;
use anyhow::{Context, Result, bail};
use mendel::experiment::{Experiment, Parent};
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;

/// Simulation engine.
///
/// Holds the configuration, the experiment and the random number generator,
/// and drives the experiment through its stages before sampling.
pub struct Engine {
    cfg: Config,
    experiment: Experiment,
    rng: ChaCha12Rng,
}

impl Engine {
    /// Create a new `Engine` with the experiment ready to simulate.
    pub fn new(cfg: Config) -> Result<Self> {
        let rng = match cfg.simulation.seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed),
            None => ChaCha12Rng::try_from_os_rng()?,
        };

        let mut experiment = Experiment::new();
        experiment
            .select_parent(cfg.cross.parent_1)
            .context("failed to select first parent")?;
        experiment
            .select_parent(cfg.cross.parent_2)
            .context("failed to select second parent")?;
        experiment
            .confirm_parents()
            .context("failed to confirm parents")?;

        // Answer the gamete check with the enumerated pools.
        let guess_1 = experiment.gamete_pool(Parent::First).to_strings();
        let guess_2 = experiment.gamete_pool(Parent::Second).to_strings();
        log::info!("gametes: {guess_1:?} x {guess_2:?}");
        if !experiment
            .check_gametes(&guess_1, &guess_2)
            .context("failed to check gametes")?
        {
            bail!("enumerated gametes were rejected");
        }

        experiment
            .start_simulation()
            .context("failed to start simulation")?;

        Ok(Self {
            cfg,
            experiment,
            rng,
        })
    }

    /// Run every configured batch and collect the results.
    pub fn perform_simulation(&mut self) -> Result<Report> {
        let theory = self.experiment.theoretical_ratios();
        let mut report = Report::new(&self.cfg, theory);
        log::info!("drawing {} offspring", self.cfg.n_offspring());

        let n_batches = self.cfg.simulation.batches.len();
        for (i_batch, &n) in self.cfg.simulation.batches.iter().enumerate() {
            self.experiment
                .run_batch(n, &mut self.rng)
                .with_context(|| format!("failed to run batch {i_batch}"))?;

            report.record_batch(n, self.experiment.stats());

            let progress = 100.0 * (i_batch + 1) as f64 / n_batches as f64;
            log::info!("completed {progress:06.2}%");
        }

        report.finish(self.experiment.stats());

        match report.max_deviation {
            Some(dev) => log::info!(
                "{} offspring, max deviation from theory {dev:.2} points",
                report.total
            ),
            None => log::info!("no offspring drawn"),
        }

        Ok(report)
    }
}
