use std::{collections::BTreeSet, fmt};

use chrono::NaiveDate;
use derive_more::Deref;
use uuid::Uuid;

use crate::{BodyPart, ExerciseID, Intensity, Name, Quantity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutDocument {
    pub id: WorkoutID,
    pub date: NaiveDate,
    pub body_parts: BTreeSet<BodyPart>,
    pub intensity: Intensity,
    pub warmup: Vec<WarmupEntry>,
    pub strength: Vec<StrengthEntry>,
    pub metcon: MetconSection,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarmupEntry {
    pub exercise_id: ExerciseID,
    pub name: Name,
    pub duration: Quantity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthEntry {
    pub exercise_id: ExerciseID,
    pub name: Name,
    pub sets: Quantity,
    pub reps: Quantity,
    pub rest: Quantity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetconSection {
    pub custom: CustomMetcon,
    pub benchmark: Option<BenchmarkMetcon>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomMetcon {
    pub id: ExerciseID,
    pub name: Name,
    pub structure: Vec<MetconStepEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetconStepEntry {
    pub exercise: Name,
    pub reps: Quantity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkMetcon {
    pub id: ExerciseID,
    pub name: Name,
    pub description: String,
}

impl fmt::Display for WorkoutDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let body_parts = self
            .body_parts
            .iter()
            .map(BodyPart::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "Workout {} ({}): {body_parts}", self.date, self.intensity)?;

        writeln!(f, "Warmup:")?;
        for (i, entry) in self.warmup.iter().enumerate() {
            writeln!(f, "{}. {} ({})", i + 1, entry.name, entry.duration)?;
        }

        writeln!(f, "Strength:")?;
        for (i, entry) in self.strength.iter().enumerate() {
            writeln!(
                f,
                "{}. {}: {} x {}, rest {}",
                i + 1,
                entry.name,
                entry.sets,
                entry.reps,
                entry.rest
            )?;
        }

        write!(f, "{}", self.metcon.custom)?;

        if let Some(benchmark) = &self.metcon.benchmark {
            writeln!(f, "Benchmark: {}", benchmark.name)?;
            writeln!(f, "{}", benchmark.description)?;
        }

        Ok(())
    }
}

impl fmt::Display for CustomMetcon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "MetCon: {}", self.name)?;
        for (i, step) in self.structure.iter().enumerate() {
            writeln!(f, "{}. {} {}", i + 1, step.reps, step.exercise)?;
        }
        Ok(())
    }
}
