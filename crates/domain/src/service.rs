use std::collections::BTreeSet;

use chrono::Local;
use log::{debug, error, info};
use rand::Rng;

use crate::{
    CatalogRepository, CustomMetcon, Equipment, GenerateError, Generator, Intensity, Request,
    Settings, WorkoutDocument,
};

pub trait WorkoutService {
    fn generate_workout<G: Rng + ?Sized>(
        &self,
        request: &Request,
        rng: &mut G,
    ) -> Result<WorkoutDocument, GenerateError>;
    fn generate_metcon<G: Rng + ?Sized>(
        &self,
        intensity: &Intensity,
        equipment: &BTreeSet<Equipment>,
        rng: &mut G,
    ) -> Result<CustomMetcon, GenerateError>;
}

/// Reads a fresh catalog snapshot from the repository for every generated workout.
pub struct Service<R> {
    repository: R,
}

impl<R: CatalogRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn try_generate_workout<G: Rng + ?Sized>(
        &self,
        request: &Request,
        rng: &mut G,
    ) -> Result<WorkoutDocument, GenerateError> {
        let exercises = self.repository.read_exercises()?;
        let benchmarks = self.repository.read_benchmarks()?;
        let settings = self.repository.read_settings()?;

        let workout = Generator::new(&exercises, &benchmarks, &settings).generate_workout(
            request,
            Local::now().date_naive(),
            rng,
        )?;

        info!(
            "generated workout {} with {} warmup and {} strength exercises",
            *workout.id,
            workout.warmup.len(),
            workout.strength.len()
        );

        Ok(workout)
    }

    fn try_generate_metcon<G: Rng + ?Sized>(
        &self,
        intensity: &Intensity,
        equipment: &BTreeSet<Equipment>,
        rng: &mut G,
    ) -> Result<CustomMetcon, GenerateError> {
        let exercises = self.repository.read_exercises()?;
        let settings = Settings::default();

        let metcon =
            Generator::new(&exercises, &[], &settings).generate_metcon(intensity, equipment, rng)?;

        info!("generated metcon {}", metcon.name);

        Ok(metcon)
    }
}

macro_rules! log_on_error {
    ($result: expr, $action: literal, $entity: literal) => {{
        let result = $result;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                GenerateError::NoBodyParts | GenerateError::EmptyPool(_) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: CatalogRepository> WorkoutService for Service<R> {
    fn generate_workout<G: Rng + ?Sized>(
        &self,
        request: &Request,
        rng: &mut G,
    ) -> Result<WorkoutDocument, GenerateError> {
        log_on_error!(
            self.try_generate_workout(request, rng),
            "generate",
            "workout"
        )
    }

    fn generate_metcon<G: Rng + ?Sized>(
        &self,
        intensity: &Intensity,
        equipment: &BTreeSet<Equipment>,
        rng: &mut G,
    ) -> Result<CustomMetcon, GenerateError> {
        log_on_error!(
            self.try_generate_metcon(intensity, equipment, rng),
            "generate",
            "metcon"
        )
    }
}
