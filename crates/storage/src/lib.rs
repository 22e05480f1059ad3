#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use parkfit_domain::FetchError;

pub mod memory;
pub mod record;
pub mod repository;
pub mod rest;


pub use memory::MemoryStore;
pub use record::RecordError;
pub use repository::Repository;
pub use rest::{GlooNetSendRequest, RestStore, SendRequest};

/// Read access to a document database holding the reference data.
#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    async fn get_all(&self, collection: Collection) -> Result<Vec<serde_json::Value>, FetchError>;
    async fn get_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<serde_json::Value>, FetchError>;
}

#[derive(
    strum::AsRefStr,
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
)]
pub enum Collection {
    #[strum(serialize = "exercises")]
    Exercises,
    #[strum(serialize = "gym_equipment")]
    GymEquipment,
    #[strum(serialize = "gear_definitions")]
    GearDefinitions,
    #[strum(serialize = "parks")]
    Parks,
}
