use crate::config::Config;
use anyhow::{Context, Result};
use mendel::genotype::PhenotypeClass;
use mendel::stats::{RatioTable, SimulationState};
use serde::Serialize;
use std::{fs, path::Path};

/// Tallies and ratios of one phenotype class.
#[derive(Debug, Serialize)]
pub struct ClassReport {
    pub class: PhenotypeClass,
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed: Option<f64>,
    pub theoretical: f64,
}

/// Running totals after one batch.
#[derive(Debug, Serialize)]
pub struct BatchRecord {
    pub size: u64,
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_deviation: Option<f64>,
}

/// Outcome of a simulation, written to `results.toml`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub parent_1: String,
    pub parent_2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_deviation: Option<f64>,
    pub classes: Vec<ClassReport>,
    pub trace: Vec<BatchRecord>,

    #[serde(skip)]
    theory: RatioTable,
}

impl Report {
    pub fn new(cfg: &Config, theory: RatioTable) -> Self {
        Self {
            parent_1: cfg.cross.parent_1.to_string(),
            parent_2: cfg.cross.parent_2.to_string(),
            seed: cfg.simulation.seed,
            total: 0,
            max_deviation: None,
            classes: Vec::new(),
            trace: Vec::with_capacity(cfg.simulation.batches.len()),
            theory,
        }
    }

    pub fn record_batch(&mut self, size: u64, stats: &SimulationState) {
        self.trace.push(BatchRecord {
            size,
            total: stats.total(),
            max_deviation: stats.observed_ratios().max_deviation(&self.theory),
        });
    }

    pub fn finish(&mut self, stats: &SimulationState) {
        let observed = stats.observed_ratios();
        self.total = stats.total();
        self.max_deviation = observed.max_deviation(&self.theory);
        self.classes = PhenotypeClass::ALL
            .into_iter()
            .map(|class| ClassReport {
                class,
                count: stats.count(class),
                observed: observed.get(class),
                theoretical: self.theory.get(class).unwrap_or(0.0),
            })
            .collect();
    }

    pub fn save<P: AsRef<Path>>(&self, file: P) -> Result<()> {
        let file = file.as_ref();
        let contents = toml::to_string_pretty(self).context("failed to serialize report")?;
        fs::write(file, contents).with_context(|| format!("failed to write {file:?}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use mendel::cross::Cross;

    #[test]
    fn report_lists_classes_by_label() {
        let cross = Cross::new("YyRr".parse().unwrap(), "yyrr".parse().unwrap());
        let cfg = Config {
            cross,
            simulation: SimulationConfig {
                seed: Some(1),
                batches: vec![2],
            },
        };
        let mut stats = SimulationState::new();
        stats.accumulate(PhenotypeClass::RoundGreen.phenotype());
        stats.accumulate(PhenotypeClass::WrinkledGreen.phenotype());

        let mut report = Report::new(&cfg, cross.theoretical_ratios());
        report.record_batch(2, &stats);
        report.finish(&stats);

        let contents = toml::to_string_pretty(&report).unwrap();
        assert!(contents.contains("class = \"round-green\""), "{contents}");
        assert!(contents.contains("class = \"wrinkled-yellow\""), "{contents}");
        assert_eq!(report.max_deviation, Some(25.0));
    }
}
