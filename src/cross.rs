//! Exhaustive enumeration of a cross (Punnett square).

use crate::gamete::{Gamete, GametePool};
use crate::genotype::{Genotype, Phenotype};
use crate::stats::RatioTable;
use serde::{Deserialize, Serialize};

/// Ordered pair of parent genotypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cross {
    pub parent_1: Genotype,
    pub parent_2: Genotype,
}

impl Cross {
    pub fn new(parent_1: Genotype, parent_2: Genotype) -> Self {
        Self { parent_1, parent_2 }
    }

    pub fn pools(&self) -> (GametePool, GametePool) {
        (GametePool::of(&self.parent_1), GametePool::of(&self.parent_2))
    }

    pub fn punnett_grid(&self) -> PunnettGrid {
        let (pool_1, pool_2) = self.pools();
        enumerate(&pool_1, &pool_2)
    }

    pub fn theoretical_ratios(&self) -> RatioTable {
        theoretical_ratios(&self.punnett_grid())
    }
}

/// Fuse two gametes into an offspring genotype.
///
/// Each locus pair is sorted so the dominant symbol comes first.
pub fn combine(a: Gamete, b: Gamete) -> Genotype {
    let mut color = [a.color(), b.color()];
    let mut shape = [a.shape(), b.shape()];
    color.sort_unstable();
    shape.sort_unstable();
    Genotype::from_loci(color, shape)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub genotype: Genotype,
    pub phenotype: Phenotype,
}

/// Punnett square: rows follow the first pool, columns the second.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PunnettGrid {
    row_gametes: Vec<Gamete>,
    col_gametes: Vec<Gamete>,
    cells: Vec<Cell>,
}

impl PunnettGrid {
    pub fn row_gametes(&self) -> &[Gamete] {
        &self.row_gametes
    }

    pub fn col_gametes(&self) -> &[Gamete] {
        &self.col_gametes
    }

    pub fn n_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, i_row: usize, i_col: usize) -> Option<&Cell> {
        if i_col >= self.col_gametes.len() {
            return None;
        }
        self.cells.get(i_row * self.col_gametes.len() + i_col)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells grouped by row.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.col_gametes.len().max(1))
    }
}

/// Build the Punnett square of two gamete pools.
///
/// An empty pool yields an empty grid, the "no cross configured" state.
pub fn enumerate(pool_a: &GametePool, pool_b: &GametePool) -> PunnettGrid {
    if pool_a.is_empty() || pool_b.is_empty() {
        return PunnettGrid::default();
    }

    let mut cells = Vec::with_capacity(pool_a.len() * pool_b.len());
    for &a in pool_a {
        for &b in pool_b {
            let genotype = combine(a, b);
            cells.push(Cell {
                genotype,
                phenotype: genotype.phenotype(),
            });
        }
    }

    PunnettGrid {
        row_gametes: pool_a.as_slice().to_vec(),
        col_gametes: pool_b.as_slice().to_vec(),
        cells,
    }
}

/// Percentage of grid cells in each phenotype class.
pub fn theoretical_ratios(grid: &PunnettGrid) -> RatioTable {
    let mut counts = [0; 4];
    for cell in grid.cells() {
        counts[cell.phenotype.class().index()] += 1;
    }
    RatioTable::from_counts(&counts)
}
