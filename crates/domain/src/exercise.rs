use crate::{EquipmentID, FetchError, GearID, GearType, Location, LocalizedName};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, FetchError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: LocalizedName,
    pub base_movement_id: Option<String>,
    pub movement_group: Option<String>,
    pub execution_methods: Vec<ExecutionMethod>,
    pub target_programs: Vec<TargetProgram>,
}

impl Exercise {
    pub const DEFAULT_LEVEL: u32 = 1;

    /// Level of the exercise within the given program.
    #[must_use]
    pub fn level(&self, program_id: Option<&ProgramID>) -> u32 {
        program_id
            .and_then(|id| self.target_programs.iter().find(|p| p.program_id == *id))
            .map_or(Self::DEFAULT_LEVEL, |p| p.level)
    }

    pub fn methods_at(&self, location: Location) -> impl Iterator<Item = &ExecutionMethod> {
        self.execution_methods
            .iter()
            .filter(move |m| m.location == location)
    }

    #[must_use]
    pub fn is_available_at(&self, location: Location) -> bool {
        self.methods_at(location).next().is_some()
    }
}

document_id!(ExerciseID);

document_id!(ProgramID);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetProgram {
    pub program_id: ProgramID,
    pub level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionMethod {
    pub location: Location,
    pub required_gear_type: GearType,
    pub equipment_ids: Vec<EquipmentID>,
    pub gear_ids: Vec<GearID>,
    pub media: Media,
}

impl ExecutionMethod {
    #[must_use]
    pub fn with_main_video(&self, url: &str) -> Self {
        Self {
            media: Media {
                main_video_url: Some(url.to_string()),
                ..self.media.clone()
            },
            ..self.clone()
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Media {
    pub main_video_url: Option<String>,
    pub image_url: Option<String>,
}
