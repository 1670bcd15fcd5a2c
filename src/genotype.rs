//! Genotypes, phenotypes and the conversion between them.
//!
//! A genotype is written as four allele symbols: the two seed color alleles
//! (`Y`/`y`) followed by the two seed shape alleles (`R`/`r`), e.g. `YyRr`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Allowed symbols at the seed color locus (dominant first).
pub const COLOR_ALLELES: [char; 2] = ['Y', 'y'];
/// Allowed symbols at the seed shape locus (dominant first).
pub const SHAPE_ALLELES: [char; 2] = ['R', 'r'];

/// Immutable dihybrid genotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Genotype {
    alleles: [char; 4],
}

impl Genotype {
    /// Parse a genotype from its four-symbol form.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] if the input does not hold exactly four
    /// symbols, or if a symbol does not belong to the locus at its position.
    pub fn parse(input: &str) -> Result<Self> {
        let symbols: Vec<char> = input.chars().collect();
        if symbols.len() != 4 {
            return Err(Error::validation(
                input,
                format!("expected 4 allele symbols, found {}", symbols.len()),
            ));
        }

        for (pos, symbol) in symbols.iter().enumerate() {
            let allowed = if pos < 2 { &COLOR_ALLELES } else { &SHAPE_ALLELES };
            if !allowed.contains(symbol) {
                return Err(Error::validation(
                    input,
                    format!("symbol {symbol:?} at position {pos} must be one of {allowed:?}"),
                ));
            }
        }

        Ok(Self {
            alleles: [symbols[0], symbols[1], symbols[2], symbols[3]],
        })
    }

    /// Build a genotype from already validated locus pairs.
    pub(crate) fn from_loci(color: [char; 2], shape: [char; 2]) -> Self {
        Self {
            alleles: [color[0], color[1], shape[0], shape[1]],
        }
    }

    /// Both alleles of the seed color locus.
    pub fn color_locus(&self) -> [char; 2] {
        [self.alleles[0], self.alleles[1]]
    }

    /// Both alleles of the seed shape locus.
    pub fn shape_locus(&self) -> [char; 2] {
        [self.alleles[2], self.alleles[3]]
    }

    /// Number of loci carrying two different alleles (0, 1 or 2).
    pub fn heterozygous_loci(&self) -> usize {
        [self.color_locus(), self.shape_locus()]
            .iter()
            .filter(|pair| pair[0] != pair[1])
            .count()
    }

    pub fn phenotype(&self) -> Phenotype {
        Phenotype::from_loci(self.color_locus(), self.shape_locus())
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.alleles.iter().try_for_each(|symbol| write!(f, "{symbol}"))
    }
}

impl FromStr for Genotype {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Genotype {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Genotype> for String {
    fn from(genotype: Genotype) -> Self {
        genotype.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Round,
    Wrinkled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Yellow,
    Green,
}

/// Observable seed traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phenotype {
    pub shape: Shape,
    pub color: Color,
}

impl Phenotype {
    /// Derive the phenotype from the two locus pairs.
    ///
    /// Round iff the shape pair holds at least one `R`; yellow iff the color
    /// pair holds at least one `Y`.
    pub fn from_loci(color: [char; 2], shape: [char; 2]) -> Self {
        Self {
            shape: if shape.contains(&'R') {
                Shape::Round
            } else {
                Shape::Wrinkled
            },
            color: if color.contains(&'Y') {
                Color::Yellow
            } else {
                Color::Green
            },
        }
    }

    pub fn class(&self) -> PhenotypeClass {
        match (self.shape, self.color) {
            (Shape::Round, Color::Yellow) => PhenotypeClass::RoundYellow,
            (Shape::Wrinkled, Color::Yellow) => PhenotypeClass::WrinkledYellow,
            (Shape::Round, Color::Green) => PhenotypeClass::RoundGreen,
            (Shape::Wrinkled, Color::Green) => PhenotypeClass::WrinkledGreen,
        }
    }

    /// Canonical class key, e.g. `round-yellow`.
    pub fn label(&self) -> &'static str {
        self.class().label()
    }

    /// Human readable description, e.g. `round yellow seed`.
    pub fn description(&self) -> String {
        let shape = match self.shape {
            Shape::Round => "round",
            Shape::Wrinkled => "wrinkled",
        };
        let color = match self.color {
            Color::Yellow => "yellow",
            Color::Green => "green",
        };
        format!("{shape} {color} seed")
    }
}

/// One of the four phenotype classes of a dihybrid cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhenotypeClass {
    RoundYellow,
    WrinkledYellow,
    RoundGreen,
    WrinkledGreen,
}

impl PhenotypeClass {
    /// All classes in display order.
    pub const ALL: [PhenotypeClass; 4] = [
        PhenotypeClass::RoundYellow,
        PhenotypeClass::WrinkledYellow,
        PhenotypeClass::RoundGreen,
        PhenotypeClass::WrinkledGreen,
    ];

    /// Position of the class in [`PhenotypeClass::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            PhenotypeClass::RoundYellow => "round-yellow",
            PhenotypeClass::WrinkledYellow => "wrinkled-yellow",
            PhenotypeClass::RoundGreen => "round-green",
            PhenotypeClass::WrinkledGreen => "wrinkled-green",
        }
    }

    pub fn phenotype(self) -> Phenotype {
        let (shape, color) = match self {
            PhenotypeClass::RoundYellow => (Shape::Round, Color::Yellow),
            PhenotypeClass::WrinkledYellow => (Shape::Wrinkled, Color::Yellow),
            PhenotypeClass::RoundGreen => (Shape::Round, Color::Green),
            PhenotypeClass::WrinkledGreen => (Shape::Wrinkled, Color::Green),
        };
        Phenotype { shape, color }
    }

    /// Selectable parent genotypes expressing this class.
    pub fn catalog(self) -> &'static [&'static str] {
        match self {
            PhenotypeClass::RoundYellow => &["YYRR", "YyRR", "YYRr", "YyRr"],
            PhenotypeClass::WrinkledYellow => &["YYrr", "Yyrr"],
            PhenotypeClass::RoundGreen => &["yyRR", "yyRr"],
            PhenotypeClass::WrinkledGreen => &["yyrr"],
        }
    }
}

impl fmt::Display for PhenotypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validate a genotype string and derive its phenotype.
pub fn parse_phenotype(genotype: &str) -> Result<Phenotype> {
    Genotype::parse(genotype).map(|genotype| genotype.phenotype())
}
