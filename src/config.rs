use anyhow::{Context, Result, bail};
use mendel::cross::Cross;
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Simulation configuration.
///
/// Loaded from a TOML file and validated before use.
/// See [`Config::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Parents of the experiment.
    pub cross: Cross,

    /// Sampling parameters.
    pub simulation: SimulationConfig,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Seed of the random number generator (OS entropy if absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Number of offspring drawn in each successive batch.
    pub batches: Vec<u64>,
}

impl Config {
    /// Load a [`Config`] from a file.
    ///
    /// Parent genotypes are validated while deserializing.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let config: Config = toml::from_str(&contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        check_num(self.simulation.batches.len(), 1..1000).context("invalid number of batches")?;
        for (i_batch, &n) in self.simulation.batches.iter().enumerate() {
            check_num(n, 0..=10_000).with_context(|| format!("invalid size of batch {i_batch}"))?;
        }

        Ok(())
    }

    /// Total number of offspring drawn over all batches.
    pub fn n_offspring(&self) -> u64 {
        self.simulation.batches.iter().sum()
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Result<Config> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn parses_a_valid_config() {
        let config = parse(
            "[cross]\nparent_1 = \"YyRr\"\nparent_2 = \"yyrr\"\n\n\
             [simulation]\nseed = 42\nbatches = [1, 10, 100]\n",
        )
        .unwrap();
        assert_eq!(config.cross.parent_1.to_string(), "YyRr");
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.n_offspring(), 111);
    }

    #[test]
    fn cross_section_keeps_parent_order() {
        let config = parse(
            "[cross]\nparent_1 = \"yyrr\"\nparent_2 = \"YyRr\"\n\n\
             [simulation]\nbatches = [1]\n",
        )
        .unwrap();
        let expected = Cross::new("yyrr".parse().unwrap(), "YyRr".parse().unwrap());
        assert_eq!(config.cross, expected);
    }

    #[test]
    fn seed_is_optional() {
        let config = parse(
            "[cross]\nparent_1 = \"YYRR\"\nparent_2 = \"yyrr\"\n\n\
             [simulation]\nbatches = [5]\n",
        )
        .unwrap();
        assert_eq!(config.simulation.seed, None);
    }

    #[test]
    fn rejects_malformed_genotype() {
        let result = parse(
            "[cross]\nparent_1 = \"RrYy\"\nparent_2 = \"yyrr\"\n\n\
             [simulation]\nbatches = [5]\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_bad_batches() {
        for batches in ["[]", "[20000]"] {
            let result = parse(&format!(
                "[cross]\nparent_1 = \"YyRr\"\nparent_2 = \"yyrr\"\n\n\
                 [simulation]\nbatches = {batches}\n"
            ));
            assert!(result.is_err(), "{batches}");
        }
    }
}
