#[derive(
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
)]
#[strum(serialize_all = "snake_case")]
pub enum Location {
    Home,
    Park,
    Street,
    Office,
    School,
    Gym,
}

impl Location {
    /// Gear types in the order in which methods are considered when no brand-specific method was
    /// found.
    #[must_use]
    pub fn gear_priority(self) -> &'static [GearType] {
        match self {
            Location::Home | Location::Office | Location::School => {
                &[GearType::UserGear, GearType::Improvised]
            }
            Location::Park | Location::Gym => &[
                GearType::FixedEquipment,
                GearType::UserGear,
                GearType::Improvised,
            ],
            Location::Street => &[GearType::UserGear, GearType::Improvised],
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Location::Home => "Home",
            Location::Park => "Park",
            Location::Street => "Street",
            Location::Office => "Office",
            Location::School => "School",
            Location::Gym => "Gym",
        }
    }
}

#[derive(
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
)]
#[strum(serialize_all = "snake_case")]
pub enum GearType {
    FixedEquipment,
    UserGear,
    Improvised,
}
