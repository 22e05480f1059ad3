//! Execution method selection
//!
//! An exercise usually offers several execution methods per location. In parks, methods using
//! installed equipment of a brand with its own demonstration video are preferred, followed by
//! any method using installed equipment. Otherwise the gear type priority of the location
//! decides.

use log::{debug, warn};

use crate::{
    Brand, EquipmentID, ExecutionMethod, Exercise, GearType, GymEquipment, Location, Park,
    UserProfile,
};

#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub location: Location,
    pub park: Option<&'a Park>,
    /// Not considered yet, gear ownership is not verified.
    pub user_profile: &'a UserProfile,
}

pub struct MethodSelector<'a> {
    gym_equipment: &'a [GymEquipment],
}

impl<'a> MethodSelector<'a> {
    #[must_use]
    pub fn new(gym_equipment: &'a [GymEquipment]) -> Self {
        Self { gym_equipment }
    }

    /// Select the execution method to present for the exercise in the given context.
    ///
    /// Returns `None` if the exercise cannot be performed in the context.
    #[must_use]
    pub fn select(&self, exercise: &Exercise, context: &Context) -> Option<ExecutionMethod> {
        let methods = exercise.methods_at(context.location).collect::<Vec<_>>();

        if methods.is_empty() {
            return None;
        }

        if let Some(park) = context
            .park
            .filter(|p| context.location == Location::Park && !p.equipment.is_empty())
        {
            if let Some(method) = self.match_brand(&methods, park) {
                return Some(method);
            }
        }

        fallback(&methods, context).cloned()
    }

    fn match_brand(&self, methods: &[&ExecutionMethod], park: &Park) -> Option<ExecutionMethod> {
        let mut installed_method = None;

        for method in methods
            .iter()
            .filter(|m| m.required_gear_type == GearType::FixedEquipment)
        {
            for equipment_id in &method.equipment_ids {
                let Some(installed) = park.installed(equipment_id) else {
                    continue;
                };
                let Some(definition) = self.definition(equipment_id) else {
                    if !self.gym_equipment.is_empty() {
                        warn!(
                            "equipment {equipment_id} of park {} missing in catalog",
                            park.id
                        );
                    }
                    continue;
                };

                if let Some(video) = installed
                    .brand_name
                    .as_deref()
                    .and_then(|name| definition.brand(name))
                    .and_then(Brand::video)
                {
                    debug!("using video of brand for {equipment_id} in park {}", park.id);
                    return Some(method.with_main_video(video));
                }

                if installed_method.is_none() {
                    installed_method = Some(*method);
                }
            }
        }

        installed_method.cloned()
    }

    fn definition(&self, equipment_id: &EquipmentID) -> Option<&GymEquipment> {
        self.gym_equipment.iter().find(|e| e.id == *equipment_id)
    }
}

fn fallback<'m>(
    methods: &[&'m ExecutionMethod],
    context: &Context,
) -> Option<&'m ExecutionMethod> {
    context
        .location
        .gear_priority()
        .iter()
        .find_map(|gear_type| {
            methods
                .iter()
                .copied()
                .filter(|m| m.required_gear_type == *gear_type)
                .find(|m| match gear_type {
                    GearType::FixedEquipment => {
                        context.park.is_some_and(|p| p.has_any(&m.equipment_ids))
                    }
                    // TODO: check gear_ids against context.user_profile once ownership is tracked
                    GearType::UserGear | GearType::Improvised => !m.gear_ids.is_empty(),
                })
        })
}
