use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::NaiveDate;
use derive_more::Display;
use rand::{Rng, seq::SliceRandom};
use uuid::Builder;

use crate::{
    Benchmark, BenchmarkMetcon, BodyPart, CustomMetcon, Equipment, ExerciseCatalog, ExerciseID,
    GenerateError, Intensity, MetconExercise, MetconSection, MetconStepEntry, Name, SampleSize,
    Settings, StrengthEntry, Tagged, WarmupEntry, WorkoutDocument, WorkoutID,
};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    #[display("warmup")]
    Warmup,
    #[display("strength")]
    Strength,
    #[display("metcon")]
    Metcon,
    #[display("benchmark")]
    Benchmark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub body_parts: BTreeSet<BodyPart>,
    pub intensity: Intensity,
    /// Empty if the athlete has not restricted the available equipment.
    pub equipment: BTreeSet<Equipment>,
}

impl Request {
    pub fn new(body_parts: impl IntoIterator<Item = BodyPart>, intensity: Intensity) -> Self {
        Self {
            body_parts: body_parts.into_iter().collect(),
            intensity,
            equipment: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_equipment(mut self, equipment: impl IntoIterator<Item = Equipment>) -> Self {
        self.equipment = equipment.into_iter().collect();
        self
    }
}

/// Assembles workouts from an already loaded catalog snapshot.
///
/// All randomness is drawn from the generator passed to each call, so a seeded generator
/// yields the same workout for the same request and `today`.
pub struct Generator<'a> {
    exercises: &'a ExerciseCatalog,
    benchmarks: &'a [Benchmark],
    settings: &'a Settings,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub fn new(
        exercises: &'a ExerciseCatalog,
        benchmarks: &'a [Benchmark],
        settings: &'a Settings,
    ) -> Self {
        Self {
            exercises,
            benchmarks,
            settings,
        }
    }

    pub fn generate_workout<R: Rng + ?Sized>(
        &self,
        request: &Request,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<WorkoutDocument, GenerateError> {
        if request.body_parts.is_empty() {
            return Err(GenerateError::NoBodyParts);
        }

        let warmup_pool = eligible(&self.exercises.warmup, |e| &e.id, request);
        let strength_pool = eligible(&self.exercises.strength, |e| &e.id, request);
        let metcon_pool = eligible(&self.exercises.metcon, |e| &e.id, request);
        let benchmark_pool = eligible(self.benchmarks, |b| &b.id, request);

        let warmup = sample(&warmup_pool, self.settings.warmup_count, rng)
            .into_iter()
            .map(|e| WarmupEntry {
                exercise_id: e.id.clone(),
                name: e.name.clone(),
                duration: e
                    .duration
                    .clone()
                    .unwrap_or_else(|| self.settings.default_warmup_duration.clone()),
            })
            .collect();

        let strength = sample(&strength_pool, self.settings.strength_count, rng)
            .into_iter()
            .map(|e| -> Result<StrengthEntry, GenerateError> {
                Ok(StrengthEntry {
                    exercise_id: e.id.clone(),
                    name: e.name.clone(),
                    sets: e.sets.clone(),
                    reps: resolve(&e.reps, &request.intensity, &e.name)?.clone(),
                    rest: e.rest.clone(),
                })
            })
            .collect::<Result<Vec<_>, GenerateError>>()?;

        let metcon = metcon_pool
            .choose(rng)
            .ok_or(GenerateError::EmptyPool(Pool::Metcon))?;
        let custom = custom_metcon(metcon, &request.intensity)?;

        let benchmark = match benchmark_pool.choose(rng) {
            Some(benchmark) => Some(BenchmarkMetcon {
                id: benchmark.id.clone(),
                name: benchmark.name.clone(),
                description: resolve(
                    &benchmark.descriptions,
                    &request.intensity,
                    &benchmark.name,
                )?
                .clone(),
            }),
            None => None,
        };

        Ok(WorkoutDocument {
            id: workout_id(rng),
            date: today,
            body_parts: request.body_parts.clone(),
            intensity: request.intensity.clone(),
            warmup,
            strength,
            metcon: MetconSection { custom, benchmark },
        })
    }

    /// Picks a single metcon from the whole category, regardless of body parts.
    pub fn generate_metcon<R: Rng + ?Sized>(
        &self,
        intensity: &Intensity,
        equipment: &BTreeSet<Equipment>,
        rng: &mut R,
    ) -> Result<CustomMetcon, GenerateError> {
        let pool = unique(
            self.exercises
                .metcon
                .iter()
                .filter(|e| e.usable_with(equipment)),
            |e| &e.id,
        );
        let metcon = pool
            .choose(rng)
            .ok_or(GenerateError::EmptyPool(Pool::Metcon))?;
        custom_metcon(metcon, intensity)
    }
}

fn eligible<'a, T: Tagged>(
    records: &'a [T],
    id: impl Fn(&T) -> &ExerciseID,
    request: &Request,
) -> Vec<&'a T> {
    unique(
        records
            .iter()
            .filter(|r| r.targets_any(&request.body_parts) && r.usable_with(&request.equipment)),
        id,
    )
}

/// Keeps the first record for each identifier.
fn unique<'a, T>(
    records: impl Iterator<Item = &'a T>,
    id: impl Fn(&T) -> &ExerciseID,
) -> Vec<&'a T> {
    let mut seen = HashSet::new();
    records.filter(|&r| seen.insert(id(r).clone())).collect()
}

fn sample<'a, T, R: Rng + ?Sized>(pool: &[&'a T], size: SampleSize, rng: &mut R) -> Vec<&'a T> {
    let amount = rng.gen_range(size.range()).min(pool.len());
    pool.choose_multiple(rng, amount).copied().collect()
}

fn resolve<'a, T>(
    table: &'a BTreeMap<Intensity, T>,
    intensity: &Intensity,
    record: &Name,
) -> Result<&'a T, GenerateError> {
    table
        .get(intensity)
        .ok_or_else(|| GenerateError::MissingIntensity {
            record: record.clone(),
            intensity: intensity.clone(),
        })
}

fn custom_metcon(
    metcon: &MetconExercise,
    intensity: &Intensity,
) -> Result<CustomMetcon, GenerateError> {
    Ok(CustomMetcon {
        id: metcon.id.clone(),
        name: metcon.name.clone(),
        structure: metcon
            .structure
            .iter()
            .map(|step| -> Result<MetconStepEntry, GenerateError> {
                Ok(MetconStepEntry {
                    exercise: step.exercise.clone(),
                    reps: resolve(&step.reps, intensity, &metcon.name)?.clone(),
                })
            })
            .collect::<Result<Vec<_>, GenerateError>>()?,
    })
}

fn workout_id<R: Rng + ?Sized>(rng: &mut R) -> WorkoutID {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes[..]);
    Builder::from_random_bytes(bytes).into_uuid().into()
}
