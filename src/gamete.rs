//! Gametes and the pools a genotype produces under independent assortment.

use crate::error::{Error, Result};
use crate::genotype::{COLOR_ALLELES, Genotype, SHAPE_ALLELES};
use std::fmt;

/// Candidate answers offered when asking which gametes a parent produces.
///
/// Only the first four are well-formed gametes.
pub const GUESS_OPTIONS: [&str; 12] = [
    "YR", "Yr", "yR", "yr", "Yy", "Rr", "YY", "rr", "Y", "y", "R", "r",
];

/// One allele per locus, `[color, shape]`.
///
/// Ordering is lexicographic over the two-symbol form (`YR < Yr < yR < yr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gamete {
    color: char,
    shape: char,
}

impl Gamete {
    /// Parse a gamete from its two-symbol form.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] unless the input is one color allele
    /// followed by one shape allele.
    pub fn parse(input: &str) -> Result<Self> {
        let mut symbols = input.chars();
        match (symbols.next(), symbols.next(), symbols.next()) {
            (Some(color), Some(shape), None)
                if COLOR_ALLELES.contains(&color) && SHAPE_ALLELES.contains(&shape) =>
            {
                Ok(Self { color, shape })
            }
            _ => Err(Error::validation(
                input,
                "a gamete is one color allele followed by one shape allele",
            )),
        }
    }

    pub fn color(&self) -> char {
        self.color
    }

    pub fn shape(&self) -> char {
        self.shape
    }
}

impl fmt::Display for Gamete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color, self.shape)
    }
}

/// Distinct gametes of a genotype, in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GametePool {
    gametes: Vec<Gamete>,
}

impl GametePool {
    /// Pool of a parent that has not been chosen yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Enumerate the four color × shape pairings and canonicalize them.
    pub fn of(genotype: &Genotype) -> Self {
        let [c1, c2] = genotype.color_locus();
        let [s1, s2] = genotype.shape_locus();
        let gametes = [(c1, s1), (c1, s2), (c2, s1), (c2, s2)]
            .into_iter()
            .map(|(color, shape)| Gamete { color, shape })
            .collect();
        Self::canonical(gametes)
    }

    fn canonical(mut gametes: Vec<Gamete>) -> Self {
        gametes.sort();
        gametes.dedup();
        Self { gametes }
    }

    pub fn len(&self) -> usize {
        self.gametes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gametes.is_empty()
    }

    pub fn as_slice(&self) -> &[Gamete] {
        &self.gametes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gamete> {
        self.gametes.iter()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.gametes.iter().map(Gamete::to_string).collect()
    }

    /// Check a learner's claimed gamete set against this pool.
    ///
    /// The claim is correct only if it names every gamete of the pool exactly
    /// once and nothing else. Malformed entries make the claim incorrect.
    pub fn verify<S: AsRef<str>>(&self, guess: &[S]) -> bool {
        if guess.len() != self.len() {
            return false;
        }
        let mut claimed = Vec::with_capacity(guess.len());
        for entry in guess {
            match Gamete::parse(entry.as_ref()) {
                Ok(gamete) => claimed.push(gamete),
                Err(_) => return false,
            }
        }
        Self::canonical(claimed) == *self
    }
}

impl<'a> IntoIterator for &'a GametePool {
    type Item = &'a Gamete;
    type IntoIter = std::slice::Iter<'a, Gamete>;

    fn into_iter(self) -> Self::IntoIter {
        self.gametes.iter()
    }
}

/// Gamete pool of a genotype.
pub fn gametes(genotype: &Genotype) -> GametePool {
    GametePool::of(genotype)
}
