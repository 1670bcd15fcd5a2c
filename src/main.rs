mod analysis;
mod config;
mod engine;
mod manager;

use crate::manager::Manager;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mendel::{cross::Cross, gamete::GUESS_OPTIONS, genotype::Genotype, genotype::PhenotypeClass};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the phenotype of a genotype
    Phenotype { genotype: String },

    /// List the gametes a genotype produces
    Gametes { genotype: String },

    /// Show the Punnett square and theoretical ratios of a cross
    Cross { parent_1: String, parent_2: String },

    /// List the selectable genotypes and gamete answer options
    Catalog,

    /// Run the configured simulation
    Simulate {
        #[arg(long)]
        sim_dir: PathBuf,
    },

    /// Remove simulation results
    Clean {
        #[arg(long)]
        sim_dir: PathBuf,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::debug!("{args:#?}");

    match args.command {
        Command::Phenotype { genotype } => {
            let phenotype = mendel::phenotype_of(&genotype)
                .with_context(|| format!("failed to parse genotype {genotype:?}"))?;
            println!("{genotype}: {} ({})", phenotype.label(), phenotype.description());
        }
        Command::Gametes { genotype } => {
            let pool = mendel::gametes_of(&genotype)
                .with_context(|| format!("failed to parse genotype {genotype:?}"))?;
            println!("{genotype}: {}", pool.join(" "));
        }
        Command::Cross { parent_1, parent_2 } => {
            let cross = Cross::new(parse_genotype(&parent_1)?, parse_genotype(&parent_2)?);
            print_cross(&cross);
        }
        Command::Catalog => print_catalog(),
        Command::Simulate { sim_dir } => {
            let mgr = Manager::new(sim_dir).context("failed to construct mgr")?;
            mgr.run_simulation()?;
        }
        Command::Clean { sim_dir } => {
            let mgr = Manager::new(sim_dir).context("failed to construct mgr")?;
            mgr.clean_sim()?;
        }
    }

    Ok(())
}

fn parse_genotype(input: &str) -> Result<Genotype> {
    Genotype::parse(input).with_context(|| format!("failed to parse genotype {input:?}"))
}

fn print_cross(cross: &Cross) {
    let grid = cross.punnett_grid();

    print!("{:>6}", "P1\\P2");
    for gamete in grid.col_gametes() {
        print!(" {:>6}", gamete.to_string());
    }
    println!();
    for (gamete, row) in grid.row_gametes().iter().zip(grid.rows()) {
        print!("{:>6}", gamete.to_string());
        for cell in row {
            print!(" {:>6}", cell.genotype.to_string());
        }
        println!();
    }

    println!();
    for (class, pct) in cross.theoretical_ratios().iter() {
        println!("{:<16}{pct:>7.2}%", class.label());
    }
}

fn print_catalog() {
    for class in PhenotypeClass::ALL {
        println!("{:<16}{}", class.label(), class.catalog().join(" "));
    }
    println!();
    println!("gamete options: {}", GUESS_OPTIONS.join(" "));
}
