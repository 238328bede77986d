use derive_more::{AsRef, Display};

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 128 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 128 characters or fewer ({0} > 128)")]
    TooLong(usize),
}

/// Case-insensitive tag used to match catalog records against a request.
macro_rules! label {
    ($(#[$meta:meta])* $name: ident) => {
        $(#[$meta])*
        #[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(label: &str) -> Result<Self, LabelError> {
                let trimmed_label = label.trim();

                if trimmed_label.is_empty() {
                    return Err(LabelError::Empty);
                }

                let len = trimmed_label.len();

                if len > 64 {
                    return Err(LabelError::TooLong(len));
                }

                Ok($name(trimmed_label.to_lowercase()))
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

label!(
    /// Muscle group a record applies to, e.g. `legs` or `core`.
    BodyPart
);
label!(
    /// Key into the per-intensity rep and description tables, e.g. `rx`.
    Intensity
);
label!(Equipment);

impl Equipment {
    /// Items that never restrict a record when filtering by available equipment.
    #[must_use]
    pub fn is_bodyweight(&self) -> bool {
        matches!(self.0.as_str(), "bodyweight" | "none")
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LabelError {
    #[error("Label must not be empty")]
    Empty,
    #[error("Label must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}
