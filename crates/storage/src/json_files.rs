use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use serde::de::DeserializeOwned;
use strum::AsRefStr;
use wodgen_domain as domain;

use crate::schema;

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    #[strum(serialize = "exercises.json")]
    Exercises,
    #[strum(serialize = "benchmarks.json")]
    Benchmarks,
    #[strum(serialize = "settings.json")]
    Settings,
}

/// Catalog files in a single data directory, re-read on every access.
#[derive(Debug, Clone)]
pub struct JsonFiles {
    data_dir: PathBuf,
}

impl JsonFiles {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn read<T: DeserializeOwned>(&self, source: Source) -> Result<T, domain::StorageError> {
        let path = self.data_dir.join(source.as_ref());
        debug!("reading {}", path.display());

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(domain::StorageError::NotFound(path.display().to_string()));
            }
            Err(err) => return Err(domain::StorageError::Other(err.into())),
        };

        serde_json::from_str(&content).map_err(|err| malformed(source, &err))
    }
}

fn malformed(source: Source, err: &dyn std::error::Error) -> domain::StorageError {
    domain::StorageError::Malformed {
        source_name: source.as_ref().to_string(),
        message: err.to_string(),
    }
}

impl domain::CatalogRepository for JsonFiles {
    fn read_exercises(&self) -> Result<domain::ExerciseCatalog, domain::ReadError> {
        let file: schema::ExercisesFile = self.read(Source::Exercises)?;
        Ok(domain::ExerciseCatalog::try_from(file.exercises)
            .map_err(|err| malformed(Source::Exercises, &err))?)
    }

    fn read_benchmarks(&self) -> Result<Vec<domain::Benchmark>, domain::ReadError> {
        let benchmarks: Vec<schema::Benchmark> = self.read(Source::Benchmarks)?;
        Ok(benchmarks
            .into_iter()
            .map(domain::Benchmark::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| malformed(Source::Benchmarks, &err))?)
    }

    fn read_settings(&self) -> Result<domain::Settings, domain::ReadError> {
        let settings = match self.read::<schema::Settings>(Source::Settings) {
            Ok(settings) => settings,
            Err(domain::StorageError::NotFound(path)) => {
                debug!("{path} not found, using default settings");
                schema::Settings::default()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(domain::Settings::try_from(settings)
            .map_err(|err| malformed(Source::Settings, &err))?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;
    use serde_json::json;
    use wodgen_domain::{CatalogRepository, Tagged, WorkoutService};

    use crate::tests::data::{BENCHMARKS, DataDir, EXERCISES};

    use super::*;

    fn body_parts(labels: &[&str]) -> BTreeSet<domain::BodyPart> {
        labels
            .iter()
            .map(|l| domain::BodyPart::new(l).unwrap())
            .collect()
    }

    #[rstest]
    #[case(Source::Exercises, "exercises.json")]
    #[case(Source::Benchmarks, "benchmarks.json")]
    #[case(Source::Settings, "settings.json")]
    fn test_source_file_name(#[case] source: Source, #[case] expected: &str) {
        assert_eq!(source.as_ref(), expected);
    }

    #[test]
    fn test_read_exercises() {
        let dir = DataDir::with_fixtures();
        let catalog = JsonFiles::new(dir.path()).read_exercises().unwrap();

        assert_eq!(catalog.warmup.len(), 6);
        assert_eq!(catalog.strength.len(), 4);
        assert_eq!(catalog.metcon.len(), 3);
    }

    #[test]
    fn test_read_benchmarks() {
        let dir = DataDir::with_fixtures();
        let benchmarks = JsonFiles::new(dir.path()).read_benchmarks().unwrap();

        assert_eq!(
            benchmarks
                .iter()
                .map(|b| b.name.to_string())
                .collect::<Vec<_>>(),
            vec!["Fran", "Karen", "Cindy"]
        );
    }

    #[test]
    fn test_read_missing_file() {
        let dir = DataDir::new();
        dir.write(Source::Benchmarks, &BENCHMARKS);

        assert!(matches!(
            JsonFiles::new(dir.path()).read_exercises(),
            Err(domain::ReadError::Storage(domain::StorageError::NotFound(path)))
                if path.ends_with("exercises.json")
        ));
    }

    #[test]
    fn test_read_malformed_file() {
        let dir = DataDir::new();
        dir.write_raw(Source::Exercises, "{ \"exercises\": [");

        assert!(matches!(
            JsonFiles::new(dir.path()).read_exercises(),
            Err(domain::ReadError::Storage(domain::StorageError::Malformed { source_name, .. }))
                if source_name == "exercises.json"
        ));
    }

    #[rstest]
    #[case::missing_category(json!({ "exercises": { "warmup": [], "strength": [] } }))]
    #[case::missing_body_parts(json!({
        "exercises": {
            "warmup": [{ "id": 1, "name": "Air Squat", "duration": "60 seconds" }],
            "strength": [],
            "metcon": []
        }
    }))]
    fn test_read_exercises_missing_field(#[case] content: serde_json::Value) {
        let dir = DataDir::new();
        dir.write(Source::Exercises, &content);

        assert!(matches!(
            JsonFiles::new(dir.path()).read_exercises(),
            Err(domain::ReadError::Storage(domain::StorageError::Malformed { source_name, .. }))
                if source_name == "exercises.json"
        ));
    }

    #[test]
    fn test_read_duplicate_intensity() {
        let dir = DataDir::new();
        dir.write(
            Source::Benchmarks,
            &json!([{
                "id": "karen",
                "name": "Karen",
                "bodyParts": ["lower_body"],
                "intensity": { "rx": "150 wall balls", "Rx": "100 wall balls" }
            }]),
        );

        assert!(matches!(
            JsonFiles::new(dir.path()).read_benchmarks(),
            Err(domain::ReadError::Storage(domain::StorageError::Malformed { source_name, message }))
                if source_name == "benchmarks.json"
                    && message == "Intensity \"rx\" is defined more than once"
        ));
    }

    #[test]
    fn test_read_invalid_record() {
        let dir = DataDir::new();
        dir.write(
            Source::Benchmarks,
            &json!([{ "id": "x", "name": "", "bodyParts": ["core"], "intensity": {} }]),
        );

        assert!(matches!(
            JsonFiles::new(dir.path()).read_benchmarks(),
            Err(domain::ReadError::Storage(domain::StorageError::Malformed { source_name, message }))
                if source_name == "benchmarks.json" && message == "Name must not be empty"
        ));
    }

    #[test]
    fn test_read_settings_default() {
        let dir = DataDir::with_fixtures();

        assert_eq!(
            JsonFiles::new(dir.path()).read_settings().unwrap(),
            domain::Settings::default()
        );
    }

    #[test]
    fn test_read_settings() {
        let dir = DataDir::with_fixtures();
        dir.write(
            Source::Settings,
            &json!({ "warmupCount": { "min": 4, "max": 4 } }),
        );

        assert_eq!(
            JsonFiles::new(dir.path()).read_settings().unwrap(),
            domain::Settings {
                warmup_count: domain::SampleSize::new(4, 4).unwrap(),
                ..domain::Settings::default()
            }
        );
    }

    #[test]
    fn test_generate_workout_from_files() {
        let dir = DataDir::with_fixtures();
        let repository = JsonFiles::new(dir.path());
        let exercises = repository.read_exercises().unwrap();
        let benchmarks = repository.read_benchmarks().unwrap();
        let service = domain::Service::new(repository);
        let requested = body_parts(&["lower_body", "core"]);
        let request = domain::Request::new(
            requested.clone(),
            domain::Intensity::new("rx").unwrap(),
        );
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..20 {
            let workout = service.generate_workout(&request, &mut rng).unwrap();

            assert!((3..=5).contains(&workout.warmup.len()));
            assert!((1..=2).contains(&workout.strength.len()));
            for entry in &workout.warmup {
                let record = exercises
                    .warmup
                    .iter()
                    .find(|e| e.id == entry.exercise_id)
                    .unwrap();
                assert!(record.targets_any(&requested));
            }
            let metcon = exercises
                .metcon
                .iter()
                .find(|e| e.id == workout.metcon.custom.id)
                .unwrap();
            assert!(metcon.targets_any(&requested));
            let benchmark = workout.metcon.benchmark.unwrap();
            assert!(
                benchmarks
                    .iter()
                    .find(|b| b.id == benchmark.id)
                    .unwrap()
                    .targets_any(&requested)
            );
        }
    }

    #[test]
    fn test_generate_workout_without_exercises() {
        let dir = DataDir::new();
        dir.write(Source::Benchmarks, &BENCHMARKS);
        let service = domain::Service::new(JsonFiles::new(dir.path()));
        let request = domain::Request::new(
            body_parts(&["core"]),
            domain::Intensity::new("rx").unwrap(),
        );

        assert!(matches!(
            service.generate_workout(&request, &mut StdRng::seed_from_u64(0)),
            Err(domain::GenerateError::Read(domain::ReadError::Storage(
                domain::StorageError::NotFound(_)
            )))
        ));
    }

    #[test]
    fn test_generate_workout_missing_metcon_category() {
        let dir = DataDir::new();
        dir.write(
            Source::Exercises,
            &json!({ "exercises": { "warmup": [], "strength": [] } }),
        );
        dir.write(Source::Benchmarks, &BENCHMARKS);
        let service = domain::Service::new(JsonFiles::new(dir.path()));
        let request = domain::Request::new(
            body_parts(&["core"]),
            domain::Intensity::new("rx").unwrap(),
        );

        assert!(matches!(
            service.generate_workout(&request, &mut StdRng::seed_from_u64(0)),
            Err(domain::GenerateError::Read(domain::ReadError::Storage(
                domain::StorageError::Malformed { .. }
            )))
        ));
    }

    #[test]
    fn test_generate_metcon_ignores_broken_settings() {
        let dir = DataDir::with_fixtures();
        dir.write_raw(Source::Settings, "{ \"warmupCount\": ");
        let service = domain::Service::new(JsonFiles::new(dir.path()));

        assert!(
            service
                .generate_metcon(
                    &domain::Intensity::new("rx").unwrap(),
                    &BTreeSet::new(),
                    &mut StdRng::seed_from_u64(0)
                )
                .is_ok()
        );
    }

    #[test]
    fn test_generate_metcon_from_files() {
        let dir = DataDir::new();
        dir.write(Source::Exercises, &EXERCISES);
        let service = domain::Service::new(JsonFiles::new(dir.path()));
        let equipment = BTreeSet::from([domain::Equipment::new("dumbbell").unwrap()]);
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..20 {
            let metcon = service
                .generate_metcon(&domain::Intensity::new("scaled").unwrap(), &equipment, &mut rng)
                .unwrap();

            assert_eq!(metcon.name, domain::Name::new("Cindy Lite").unwrap());
        }
    }
}
