use crate::GearID;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserID,
    /// Gear the user owns.
    pub gear_ids: Vec<GearID>,
}

document_id!(UserID);
