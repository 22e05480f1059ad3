#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

/// Defines a newtype identifier around a document id.
macro_rules! document_id {
    ($name: ident) => {
        #[derive(
            derive_more::Deref,
            derive_more::Display,
            derive_more::From,
            Debug,
            Default,
            Clone,
            Hash,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
        )]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        if let Err(ref err) = result {
            if err.is_no_connection() {
                log::debug!("failed to {} {}: {err}", $action, $entity);
            } else {
                log::error!("failed to {} {}: {err}", $action, $entity);
            }
        }
        result
    }};
}

mod catalog;
mod equipment;
mod error;
mod exercise;
mod location;
mod name;
mod selector;
mod service;
mod settings;
mod substitution;
mod user;


pub use catalog::{CachePolicy, Clock, EquipmentCache, EquipmentCatalog, SystemClock};
pub use equipment::{
    Brand, EquipmentID, EquipmentRepository, GearID, GymEquipment, Park, ParkEquipment, ParkID,
    ParkRepository, UserGear,
};
pub use error::FetchError;
pub use exercise::{
    ExecutionMethod, Exercise, ExerciseID, ExerciseRepository, Media, ProgramID, TargetProgram,
};
pub use location::{GearType, Location};
pub use name::{Language, LocalizedName};
pub use selector::{Context, MethodSelector};
pub use service::{ExecutionMethodService, Service, SubstitutionService};
pub use settings::{CacheSettings, FinderSettings, Settings};
pub use substitution::{
    Candidate, Family, LevelComparison, SubstitutionFinder, SubstitutionQuery, Substitutes,
};
pub use user::{UserID, UserProfile};
