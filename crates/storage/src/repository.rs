use log::warn;
use parkfit_domain as domain;
use serde::de::DeserializeOwned;

use crate::{Collection, DocumentStore, RecordError, record};

/// Domain repositories backed by a document store.
///
/// Documents which cannot be converted are skipped when reading a collection.
pub struct Repository<D> {
    store: D,
}

impl<D> Repository<D> {
    pub const fn new(store: D) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &D {
        &self.store
    }
}

impl<D: DocumentStore> Repository<D> {
    async fn read_collection<R, T>(&self, collection: Collection) -> Result<Vec<T>, domain::FetchError>
    where
        R: DeserializeOwned,
        T: TryFrom<R, Error = RecordError>,
    {
        Ok(self
            .store
            .get_all(collection)
            .await?
            .into_iter()
            .filter_map(|document| match convert::<R, T>(document) {
                Ok(item) => Some(item),
                Err(err) => {
                    warn!("skipping invalid document in {}: {err}", collection.as_ref());
                    None
                }
            })
            .collect())
    }
}

fn convert<R, T>(document: serde_json::Value) -> Result<T, Box<dyn std::error::Error>>
where
    R: DeserializeOwned,
    T: TryFrom<R, Error = RecordError>,
{
    Ok(T::try_from(serde_json::from_value::<R>(document)?)?)
}

impl<D: DocumentStore> domain::ExerciseRepository for Repository<D> {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::FetchError> {
        self.read_collection::<record::Exercise, _>(Collection::Exercises)
            .await
    }
}

impl<D: DocumentStore> domain::EquipmentRepository for Repository<D> {
    async fn read_gym_equipment(&self) -> Result<Vec<domain::GymEquipment>, domain::FetchError> {
        self.read_collection::<record::GymEquipment, _>(Collection::GymEquipment)
            .await
    }

    async fn read_user_gear(&self) -> Result<Vec<domain::UserGear>, domain::FetchError> {
        self.read_collection::<record::UserGear, _>(Collection::GearDefinitions)
            .await
    }
}

impl<D: DocumentStore> domain::ParkRepository for Repository<D> {
    async fn read_park(
        &self,
        id: &domain::ParkID,
    ) -> Result<Option<domain::Park>, domain::FetchError> {
        self.store
            .get_by_id(Collection::Parks, id.as_str())
            .await?
            .map(|document| {
                convert::<record::Park, domain::Park>(document)
                    .map_err(|err| domain::FetchError::Deserialization(err.to_string()))
            })
            .transpose()
    }
}
