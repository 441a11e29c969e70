//! Formation catalog
//!
//! A formation is a list of row sizes in goalkeeper-first order. Every shipped
//! formation fields eleven players.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Formation {
    #[default]
    #[serde(rename = "4-4-2")]
    FourFourTwo,
    #[serde(rename = "4-3-3")]
    FourThreeThree,
    #[serde(rename = "3-5-2")]
    ThreeFiveTwo,
    #[serde(rename = "4-2-3-1")]
    FourTwoThreeOne,
    #[serde(rename = "5-3-2")]
    FiveThreeTwo,
    #[serde(rename = "3-4-3")]
    ThreeFourThree,
    #[serde(rename = "4-5-1")]
    FourFiveOne,
    #[serde(rename = "5-4-1")]
    FiveFourOne,
}

impl Formation {
    pub const ALL: [Formation; 8] = [
        Self::FourFourTwo,
        Self::FourThreeThree,
        Self::ThreeFiveTwo,
        Self::FourTwoThreeOne,
        Self::FiveThreeTwo,
        Self::ThreeFourThree,
        Self::FourFiveOne,
        Self::FiveFourOne,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::FourFourTwo => "4-4-2",
            Self::FourThreeThree => "4-3-3",
            Self::ThreeFiveTwo => "3-5-2",
            Self::FourTwoThreeOne => "4-2-3-1",
            Self::FiveThreeTwo => "5-3-2",
            Self::ThreeFourThree => "3-4-3",
            Self::FourFiveOne => "4-5-1",
            Self::FiveFourOne => "5-4-1",
        }
    }

    /// Row sizes, goalkeeper row first.
    pub fn rows(self) -> &'static [usize] {
        match self {
            Self::FourFourTwo => &[1, 4, 4, 2],
            Self::FourThreeThree => &[1, 4, 3, 3],
            Self::ThreeFiveTwo => &[1, 3, 5, 2],
            Self::FourTwoThreeOne => &[1, 4, 2, 3, 1],
            Self::FiveThreeTwo => &[1, 5, 3, 2],
            Self::ThreeFourThree => &[1, 3, 4, 3],
            Self::FourFiveOne => &[1, 4, 5, 1],
            Self::FiveFourOne => &[1, 5, 4, 1],
        }
    }

    /// Number of starter slots, i.e. the starters a saved lineup must have.
    pub fn slot_count(self) -> usize {
        self.rows().iter().sum()
    }

    /// Lenient lookup: unknown names degrade to the default formation.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Row sizes for a formation name, falling back to 4-4-2.
    pub fn layout_for(name: &str) -> &'static [usize] {
        Self::from_name(name).rows()
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Formation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == trimmed)
            .ok_or_else(|| DomainError::parse(format!("Unknown formation: {}", s)))
    }
}
