use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use derive_more::Display;

use crate::{BodyPart, Equipment, Intensity, Name, ReadError, Settings};

pub trait CatalogRepository {
    fn read_exercises(&self) -> Result<ExerciseCatalog, ReadError>;
    fn read_benchmarks(&self) -> Result<Vec<Benchmark>, ReadError>;
    fn read_settings(&self) -> Result<Settings, ReadError>;
}

#[derive(Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseID(String);

impl ExerciseID {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for ExerciseID {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// A duration, set count, rest period or rep scheme as authored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantity {
    Count(u32),
    Text(String),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Quantity::Count(count) => write!(f, "{count}"),
            Quantity::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Quantity::Count(value)
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Quantity::Text(value.to_string())
    }
}

pub trait Tagged {
    fn body_parts(&self) -> &BTreeSet<BodyPart>;

    fn equipment(&self) -> &[Equipment] {
        &[]
    }

    fn targets_any(&self, body_parts: &BTreeSet<BodyPart>) -> bool {
        !self.body_parts().is_disjoint(body_parts)
    }

    /// An empty `available` set means the caller did not restrict equipment.
    fn usable_with(&self, available: &BTreeSet<Equipment>) -> bool {
        available.is_empty()
            || self
                .equipment()
                .iter()
                .all(|e| e.is_bodyweight() || available.contains(e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarmupExercise {
    pub id: ExerciseID,
    pub name: Name,
    pub body_parts: BTreeSet<BodyPart>,
    pub equipment: Vec<Equipment>,
    pub duration: Option<Quantity>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthExercise {
    pub id: ExerciseID,
    pub name: Name,
    pub body_parts: BTreeSet<BodyPart>,
    pub equipment: Vec<Equipment>,
    pub sets: Quantity,
    pub rest: Quantity,
    pub reps: BTreeMap<Intensity, Quantity>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetconExercise {
    pub id: ExerciseID,
    pub name: Name,
    pub body_parts: BTreeSet<BodyPart>,
    pub equipment: Vec<Equipment>,
    pub structure: Vec<MetconStep>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetconStep {
    pub exercise: Name,
    pub reps: BTreeMap<Intensity, Quantity>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Benchmark {
    pub id: ExerciseID,
    pub name: Name,
    pub body_parts: BTreeSet<BodyPart>,
    pub descriptions: BTreeMap<Intensity, String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseCatalog {
    pub warmup: Vec<WarmupExercise>,
    pub strength: Vec<StrengthExercise>,
    pub metcon: Vec<MetconExercise>,
}

impl ExerciseCatalog {
    #[must_use]
    pub fn body_parts(&self) -> BTreeSet<&BodyPart> {
        self.warmup
            .iter()
            .flat_map(|e| e.body_parts.iter())
            .chain(self.strength.iter().flat_map(|e| e.body_parts.iter()))
            .chain(self.metcon.iter().flat_map(|e| e.body_parts.iter()))
            .collect()
    }

    #[must_use]
    pub fn intensities(&self) -> BTreeSet<&Intensity> {
        self.strength
            .iter()
            .flat_map(|e| e.reps.keys())
            .chain(
                self.metcon
                    .iter()
                    .flat_map(|e| e.structure.iter().flat_map(|s| s.reps.keys())),
            )
            .collect()
    }
}

macro_rules! tagged {
    ($type: ty) => {
        impl Tagged for $type {
            fn body_parts(&self) -> &BTreeSet<BodyPart> {
                &self.body_parts
            }

            fn equipment(&self) -> &[Equipment] {
                &self.equipment
            }
        }
    };
}

tagged!(WarmupExercise);
tagged!(StrengthExercise);
tagged!(MetconExercise);

impl Tagged for Benchmark {
    fn body_parts(&self) -> &BTreeSet<BodyPart> {
        &self.body_parts
    }
}
