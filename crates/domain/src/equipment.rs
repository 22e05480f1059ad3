use crate::{FetchError, LocalizedName};

#[allow(async_fn_in_trait)]
pub trait EquipmentRepository {
    async fn read_gym_equipment(&self) -> Result<Vec<GymEquipment>, FetchError>;
    async fn read_user_gear(&self) -> Result<Vec<UserGear>, FetchError>;
}

#[allow(async_fn_in_trait)]
pub trait ParkRepository {
    async fn read_park(&self, id: &ParkID) -> Result<Option<Park>, FetchError>;
}

document_id!(EquipmentID);

document_id!(GearID);

document_id!(ParkID);

/// Type of fixed equipment installed in parks, e.g. a pull-up station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GymEquipment {
    pub id: EquipmentID,
    pub name: LocalizedName,
    pub brands: Vec<Brand>,
}

impl GymEquipment {
    #[must_use]
    pub fn brand(&self, name: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    pub name: String,
    pub video_url: Option<String>,
}

impl Brand {
    /// Demonstration video, if one is set.
    #[must_use]
    pub fn video(&self) -> Option<&str> {
        self.video_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Item a user may own personally, e.g. a resistance band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserGear {
    pub id: GearID,
    pub name: LocalizedName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Park {
    pub id: ParkID,
    pub name: String,
    pub equipment: Vec<ParkEquipment>,
}

impl Park {
    #[must_use]
    pub fn installed(&self, equipment_id: &EquipmentID) -> Option<&ParkEquipment> {
        self.equipment
            .iter()
            .find(|e| e.equipment_id == *equipment_id)
    }

    #[must_use]
    pub fn has_any(&self, equipment_ids: &[EquipmentID]) -> bool {
        equipment_ids.iter().any(|id| self.installed(id).is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkEquipment {
    pub equipment_id: EquipmentID,
    pub brand_name: Option<String>,
}
