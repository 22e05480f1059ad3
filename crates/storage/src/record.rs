//! Records
//!
//! Serialized form of the documents stored in the document database. Older documents reference
//! equipment and gear by a single id (`equipmentId`, `gearId`), newer ones by lists
//! (`equipmentIds`, `gearIds`). Both forms are normalized into lists when a record is converted
//! into its domain type.

use std::{collections::BTreeMap, str::FromStr};

use log::warn;
use parkfit_domain as domain;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing id")]
    MissingID,
    #[error("invalid location: {0}")]
    InvalidLocation(String),
    #[error("invalid gear type: {0}")]
    InvalidGearType(String),
}

/// Name stored either as plain Hebrew text or as text per language.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Name {
    Plain(String),
    Localized(BTreeMap<String, String>),
}

impl Default for Name {
    fn default() -> Self {
        Name::Plain(String::new())
    }
}

impl From<Name> for domain::LocalizedName {
    fn from(value: Name) -> Self {
        match value {
            Name::Plain(text) => domain::LocalizedName::new(domain::Language::He, &text),
            Name::Localized(texts) => {
                let mut name = domain::LocalizedName::default();
                for (language, text) in texts {
                    match domain::Language::from_str(&language) {
                        Ok(language) => name.insert(language, &text),
                        Err(_) => warn!("ignoring name in unknown language {language}"),
                    }
                }
                name
            }
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Exercise {
    pub id: String,
    pub name: Name,
    pub base_movement_id: Option<String>,
    pub movement_group: Option<String>,
    pub execution_methods: Vec<ExecutionMethod>,
    pub target_programs: Vec<TargetProgram>,
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = RecordError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        let id = non_empty(value.id).ok_or(RecordError::MissingID)?;
        let execution_methods = value
            .execution_methods
            .into_iter()
            .filter_map(|m| match domain::ExecutionMethod::try_from(m) {
                Ok(method) => Some(method),
                Err(err) => {
                    warn!("skipping execution method of exercise {id}: {err}");
                    None
                }
            })
            .collect();

        Ok(Self {
            id: id.into(),
            name: value.name.into(),
            base_movement_id: value.base_movement_id.and_then(non_empty),
            movement_group: value.movement_group.and_then(non_empty),
            execution_methods,
            target_programs: value
                .target_programs
                .into_iter()
                .map(domain::TargetProgram::from)
                .collect(),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutionMethod {
    pub location: String,
    pub required_gear_type: String,
    pub equipment_id: Option<String>,
    pub equipment_ids: Option<Vec<String>>,
    pub gear_id: Option<String>,
    pub gear_ids: Option<Vec<String>>,
    pub media: Media,
}

impl TryFrom<ExecutionMethod> for domain::ExecutionMethod {
    type Error = RecordError;

    fn try_from(value: ExecutionMethod) -> Result<Self, Self::Error> {
        Ok(Self {
            location: domain::Location::from_str(&value.location)
                .map_err(|_| RecordError::InvalidLocation(value.location))?,
            required_gear_type: domain::GearType::from_str(&value.required_gear_type)
                .map_err(|_| RecordError::InvalidGearType(value.required_gear_type))?,
            equipment_ids: id_list(value.equipment_ids, value.equipment_id),
            gear_ids: id_list(value.gear_ids, value.gear_id),
            media: value.media.into(),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Media {
    pub main_video_url: Option<String>,
    pub image_url: Option<String>,
}

impl From<Media> for domain::Media {
    fn from(value: Media) -> Self {
        Self {
            main_video_url: value.main_video_url.and_then(non_empty),
            image_url: value.image_url.and_then(non_empty),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TargetProgram {
    pub program_id: String,
    pub level: u32,
}

impl From<TargetProgram> for domain::TargetProgram {
    fn from(value: TargetProgram) -> Self {
        Self {
            program_id: value.program_id.into(),
            level: value.level,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GymEquipment {
    pub id: String,
    pub name: Name,
    pub brands: Vec<Brand>,
}

impl TryFrom<GymEquipment> for domain::GymEquipment {
    type Error = RecordError;

    fn try_from(value: GymEquipment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: non_empty(value.id).ok_or(RecordError::MissingID)?.into(),
            name: value.name.into(),
            brands: value.brands.into_iter().map(domain::Brand::from).collect(),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Brand {
    pub name: String,
    pub video_url: Option<String>,
}

impl From<Brand> for domain::Brand {
    fn from(value: Brand) -> Self {
        Self {
            name: value.name,
            video_url: value.video_url,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserGear {
    pub id: String,
    pub name: Name,
}

impl TryFrom<UserGear> for domain::UserGear {
    type Error = RecordError;

    fn try_from(value: UserGear) -> Result<Self, Self::Error> {
        Ok(Self {
            id: non_empty(value.id).ok_or(RecordError::MissingID)?.into(),
            name: value.name.into(),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Park {
    pub id: String,
    pub name: String,
    pub equipment: Vec<ParkEquipment>,
}

impl TryFrom<Park> for domain::Park {
    type Error = RecordError;

    fn try_from(value: Park) -> Result<Self, Self::Error> {
        let id = non_empty(value.id).ok_or(RecordError::MissingID)?;
        let equipment = value
            .equipment
            .into_iter()
            .filter_map(|e| match non_empty(e.equipment_id) {
                Some(equipment_id) => Some(domain::ParkEquipment {
                    equipment_id: equipment_id.into(),
                    brand_name: e.brand_name.and_then(non_empty),
                }),
                None => {
                    warn!("skipping equipment without id in park {id}");
                    None
                }
            })
            .collect();

        Ok(Self {
            id: id.into(),
            name: value.name,
            equipment,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ParkEquipment {
    pub equipment_id: String,
    pub brand_name: Option<String>,
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// The id list if it has entries, otherwise the legacy single id.
fn id_list<T: From<String>>(ids: Option<Vec<String>>, legacy_id: Option<String>) -> Vec<T> {
    match ids {
        Some(ids) if !ids.is_empty() => ids.into_iter().filter_map(non_empty).map(T::from).collect(),
        _ => legacy_id
            .and_then(non_empty)
            .into_iter()
            .map(T::from)
            .collect(),
    }
}
