#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod error;
pub mod generator;
pub mod name;
pub mod service;
pub mod settings;
pub mod workout;

pub use catalog::{
    Benchmark, CatalogRepository, ExerciseCatalog, ExerciseID, MetconExercise, MetconStep,
    Quantity, StrengthExercise, Tagged, WarmupExercise,
};
pub use error::{GenerateError, ReadError, StorageError};
pub use generator::{Generator, Pool, Request};
pub use name::{BodyPart, Equipment, Intensity, LabelError, Name, NameError};
pub use service::{Service, WorkoutService};
pub use settings::{SampleSize, SampleSizeError, Settings};
pub use workout::{
    BenchmarkMetcon, CustomMetcon, MetconSection, MetconStepEntry, StrengthEntry, WarmupEntry,
    WorkoutDocument, WorkoutID,
};
