use std::collections::BTreeMap;

use chrono::NaiveDate;
use uuid::Uuid;
use wodgen_domain as domain;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Id {
    Number(u64),
    Text(String),
}

impl From<Id> for domain::ExerciseID {
    fn from(value: Id) -> Self {
        match value {
            Id::Number(number) => number.into(),
            Id::Text(text) => text.into(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Quantity {
    Count(u32),
    Text(String),
}

impl From<Quantity> for domain::Quantity {
    fn from(value: Quantity) -> Self {
        match value {
            Quantity::Count(count) => domain::Quantity::Count(count),
            Quantity::Text(text) => domain::Quantity::Text(text),
        }
    }
}

impl From<&domain::Quantity> for Quantity {
    fn from(value: &domain::Quantity) -> Self {
        match value {
            domain::Quantity::Count(count) => Quantity::Count(*count),
            domain::Quantity::Text(text) => Quantity::Text(text.clone()),
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExercisesFile {
    pub exercises: Exercises,
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercises {
    pub warmup: Vec<WarmupExercise>,
    pub strength: Vec<StrengthExercise>,
    pub metcon: Vec<MetconExercise>,
}

impl TryFrom<Exercises> for domain::ExerciseCatalog {
    type Error = CatalogError;

    fn try_from(value: Exercises) -> Result<Self, Self::Error> {
        Ok(Self {
            warmup: value
                .warmup
                .into_iter()
                .map(domain::WarmupExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            strength: value
                .strength
                .into_iter()
                .map(domain::StrengthExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            metcon: value
                .metcon
                .into_iter()
                .map(domain::MetconExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WarmupExercise {
    pub id: Id,
    pub name: String,
    pub body_parts: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub duration: Option<Quantity>,
}

impl TryFrom<WarmupExercise> for domain::WarmupExercise {
    type Error = CatalogError;

    fn try_from(value: WarmupExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            body_parts: labels(&value.body_parts, domain::BodyPart::new)?,
            equipment: labels(&value.equipment, domain::Equipment::new)?,
            duration: value.duration.map(domain::Quantity::from),
        })
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StrengthExercise {
    pub id: Id,
    pub name: String,
    pub body_parts: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    pub sets: Quantity,
    pub rest: Quantity,
    pub reps: BTreeMap<String, Quantity>,
}

impl TryFrom<StrengthExercise> for domain::StrengthExercise {
    type Error = CatalogError;

    fn try_from(value: StrengthExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            body_parts: labels(&value.body_parts, domain::BodyPart::new)?,
            equipment: labels(&value.equipment, domain::Equipment::new)?,
            sets: value.sets.into(),
            rest: value.rest.into(),
            reps: intensity_table(value.reps, domain::Quantity::from)?,
        })
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetconExercise {
    pub id: Id,
    pub name: String,
    pub body_parts: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    pub structure: Vec<MetconStep>,
}

impl TryFrom<MetconExercise> for domain::MetconExercise {
    type Error = CatalogError;

    fn try_from(value: MetconExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            body_parts: labels(&value.body_parts, domain::BodyPart::new)?,
            equipment: labels(&value.equipment, domain::Equipment::new)?,
            structure: value
                .structure
                .into_iter()
                .map(domain::MetconStep::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MetconStep {
    pub exercise: String,
    pub reps: BTreeMap<String, Quantity>,
}

impl TryFrom<MetconStep> for domain::MetconStep {
    type Error = CatalogError;

    fn try_from(value: MetconStep) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise: domain::Name::new(&value.exercise)?,
            reps: intensity_table(value.reps, domain::Quantity::from)?,
        })
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Benchmark {
    pub id: Id,
    pub name: String,
    pub body_parts: Vec<String>,
    pub intensity: BTreeMap<String, String>,
}

impl TryFrom<Benchmark> for domain::Benchmark {
    type Error = CatalogError;

    fn try_from(value: Benchmark) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            body_parts: labels(&value.body_parts, domain::BodyPart::new)?,
            descriptions: intensity_table(value.intensity, |description| description)?,
        })
    }
}

#[derive(serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub warmup_count: Option<SampleSize>,
    pub strength_count: Option<SampleSize>,
    pub default_warmup_duration: Option<Quantity>,
}

#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSize {
    pub min: usize,
    pub max: usize,
}

impl TryFrom<Settings> for domain::Settings {
    type Error = CatalogError;

    fn try_from(value: Settings) -> Result<Self, Self::Error> {
        let default = domain::Settings::default();
        Ok(Self {
            warmup_count: match value.warmup_count {
                Some(size) => domain::SampleSize::new(size.min, size.max)?,
                None => default.warmup_count,
            },
            strength_count: match value.strength_count {
                Some(size) => domain::SampleSize::new(size.min, size.max)?,
                None => default.strength_count,
            },
            default_warmup_duration: value
                .default_warmup_duration
                .map_or(default.default_warmup_duration, domain::Quantity::from),
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidLabel(#[from] domain::LabelError),
    #[error(transparent)]
    InvalidSampleSize(#[from] domain::SampleSizeError),
    #[error("Intensity \"{0}\" is defined more than once")]
    DuplicateIntensity(domain::Intensity),
}

fn labels<T, C>(
    values: &[String],
    new: impl Fn(&str) -> Result<T, domain::LabelError>,
) -> Result<C, CatalogError>
where
    C: FromIterator<T>,
{
    values
        .iter()
        .map(|v| new(v).map_err(CatalogError::from))
        .collect()
}

fn intensity_table<S, T>(
    table: BTreeMap<String, S>,
    convert: impl Fn(S) -> T,
) -> Result<BTreeMap<domain::Intensity, T>, CatalogError> {
    let mut result = BTreeMap::new();
    for (label, value) in table {
        let intensity = domain::Intensity::new(&label)?;
        if result.contains_key(&intensity) {
            return Err(CatalogError::DuplicateIntensity(intensity));
        }
        result.insert(intensity, convert(value));
    }
    Ok(result)
}

/// JSON shape of a generated workout.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: Uuid,
    pub date: NaiveDate,
    pub body_parts: Vec<String>,
    pub intensity: String,
    pub warmup: Vec<WarmupEntry>,
    pub strength: Vec<StrengthEntry>,
    pub metcon: Metcon,
}

impl From<&domain::WorkoutDocument> for Workout {
    fn from(value: &domain::WorkoutDocument) -> Self {
        Self {
            id: *value.id,
            date: value.date,
            body_parts: value.body_parts.iter().map(ToString::to_string).collect(),
            intensity: value.intensity.to_string(),
            warmup: value
                .warmup
                .iter()
                .map(|e| WarmupEntry {
                    exercise_id: e.exercise_id.to_string(),
                    name: e.name.to_string(),
                    duration: (&e.duration).into(),
                })
                .collect(),
            strength: value
                .strength
                .iter()
                .map(|e| StrengthEntry {
                    exercise_id: e.exercise_id.to_string(),
                    name: e.name.to_string(),
                    sets: (&e.sets).into(),
                    reps: (&e.reps).into(),
                    rest: (&e.rest).into(),
                })
                .collect(),
            metcon: Metcon {
                custom: (&value.metcon.custom).into(),
                benchmark: value
                    .metcon
                    .benchmark
                    .as_ref()
                    .map(|b| BenchmarkMetcon {
                        id: b.id.to_string(),
                        name: b.name.to_string(),
                        description: b.description.clone(),
                    }),
            },
        }
    }
}

impl From<domain::WorkoutDocument> for Workout {
    fn from(value: domain::WorkoutDocument) -> Self {
        Self::from(&value)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WarmupEntry {
    pub exercise_id: String,
    pub name: String,
    pub duration: Quantity,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StrengthEntry {
    pub exercise_id: String,
    pub name: String,
    pub sets: Quantity,
    pub reps: Quantity,
    pub rest: Quantity,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Metcon {
    pub custom: CustomMetcon,
    pub benchmark: Option<BenchmarkMetcon>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CustomMetcon {
    pub id: String,
    pub name: String,
    pub structure: Vec<MetconStepEntry>,
}

impl From<&domain::CustomMetcon> for CustomMetcon {
    fn from(value: &domain::CustomMetcon) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            structure: value
                .structure
                .iter()
                .map(|s| MetconStepEntry {
                    exercise: s.exercise.to_string(),
                    reps: (&s.reps).into(),
                })
                .collect(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MetconStepEntry {
    pub exercise: String,
    pub reps: Quantity,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkMetcon {
    pub id: String,
    pub name: String,
    pub description: String,
}
