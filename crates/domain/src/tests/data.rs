use std::sync::LazyLock;

use crate::{
    Brand, ExecutionMethod, Exercise, GearType, GymEquipment, Language, LocalizedName, Location,
    Media, Park, ParkEquipment, TargetProgram, UserGear, UserProfile,
};

pub fn fixed_equipment(location: Location, equipment_ids: &[&str]) -> ExecutionMethod {
    ExecutionMethod {
        location,
        required_gear_type: GearType::FixedEquipment,
        equipment_ids: equipment_ids.iter().map(|id| (*id).into()).collect(),
        gear_ids: vec![],
        media: Media {
            main_video_url: Some(format!("https://video/{}.mp4", equipment_ids.join("-"))),
            image_url: None,
        },
    }
}

pub fn gear(
    location: Location,
    required_gear_type: GearType,
    gear_ids: &[&str],
) -> ExecutionMethod {
    ExecutionMethod {
        location,
        required_gear_type,
        equipment_ids: vec![],
        gear_ids: gear_ids.iter().map(|id| (*id).into()).collect(),
        media: Media::default(),
    }
}

pub fn exercise(
    id: &str,
    base_movement_id: Option<&str>,
    movement_group: Option<&str>,
    level: Option<u32>,
    execution_methods: Vec<ExecutionMethod>,
) -> Exercise {
    Exercise {
        id: id.into(),
        name: LocalizedName::new(Language::En, id),
        base_movement_id: base_movement_id.map(str::to_string),
        movement_group: movement_group.map(str::to_string),
        execution_methods,
        target_programs: level
            .map(|level| TargetProgram {
                program_id: LEGS.into(),
                level,
            })
            .into_iter()
            .collect(),
    }
}

pub const LEGS: &str = "legs";

pub static PULLUP_BAR: LazyLock<GymEquipment> = LazyLock::new(|| GymEquipment {
    id: "pullup_bar".into(),
    name: LocalizedName::new(Language::En, "Pull-up station"),
    brands: vec![
        Brand {
            name: "Ludos".to_string(),
            video_url: Some("https://video/ludos.mp4".to_string()),
        },
        Brand {
            name: "Urbanics".to_string(),
            video_url: None,
        },
    ],
});

pub static DIP_STATION: LazyLock<GymEquipment> = LazyLock::new(|| GymEquipment {
    id: "dip_station".into(),
    name: LocalizedName::new(Language::En, "Dip station"),
    brands: vec![Brand {
        name: "Urbanics".to_string(),
        video_url: Some("https://video/urbanics-dips.mp4".to_string()),
    }],
});

pub static PARALLEL_BARS: LazyLock<GymEquipment> = LazyLock::new(|| GymEquipment {
    id: "parallel_bars".into(),
    name: LocalizedName::new(Language::En, "Parallel bars"),
    brands: vec![Brand {
        name: "Ludos".to_string(),
        video_url: None,
    }],
});

pub static GYM_EQUIPMENT: LazyLock<Vec<GymEquipment>> = LazyLock::new(|| {
    vec![
        PULLUP_BAR.clone(),
        DIP_STATION.clone(),
        PARALLEL_BARS.clone(),
    ]
});

pub static USER_GEAR: LazyLock<Vec<UserGear>> = LazyLock::new(|| {
    vec![
        UserGear {
            id: "resistance_band".into(),
            name: LocalizedName::new(Language::En, "Resistance band"),
        },
        UserGear {
            id: "yoga_mat".into(),
            name: LocalizedName::new(Language::En, "Yoga mat"),
        },
    ]
});

pub static CENTRAL_PARK: LazyLock<Park> = LazyLock::new(|| Park {
    id: "central".into(),
    name: "Central Park".to_string(),
    equipment: vec![
        ParkEquipment {
            equipment_id: "pullup_bar".into(),
            brand_name: Some("Ludos".to_string()),
        },
        ParkEquipment {
            equipment_id: "parallel_bars".into(),
            brand_name: Some("Ludos".to_string()),
        },
        ParkEquipment {
            equipment_id: "monkey_bars".into(),
            brand_name: Some("Kompan".to_string()),
        },
    ],
});

pub static USER_PROFILE: LazyLock<UserProfile> = LazyLock::new(|| UserProfile {
    id: "alice".into(),
    gear_ids: vec!["resistance_band".into()],
});

pub static PULL_UP: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        "pull_up",
        Some("pull_up"),
        Some("vertical_pull"),
        Some(2),
        vec![
            fixed_equipment(Location::Park, &["pullup_bar"]),
            gear(Location::Home, GearType::Improvised, &["door_frame"]),
        ],
    )
});

pub static AIR_SQUAT: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        "air_squat",
        Some("squat_pattern"),
        Some("knee_dominant"),
        Some(2),
        vec![
            gear(Location::Park, GearType::Improvised, &["bodyweight"]),
            gear(Location::Home, GearType::Improvised, &["bodyweight"]),
        ],
    )
});

pub static BOX_SQUAT: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        "box_squat",
        Some("squat_pattern"),
        Some("knee_dominant"),
        Some(1),
        vec![gear(Location::Park, GearType::Improvised, &["bench"])],
    )
});

pub static JUMP_SQUAT: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        "jump_squat",
        Some("squat_pattern"),
        Some("knee_dominant"),
        Some(3),
        vec![gear(Location::Park, GearType::Improvised, &["bodyweight"])],
    )
});

pub static PISTOL_SQUAT: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        "pistol_squat",
        Some("squat_pattern"),
        Some("knee_dominant"),
        Some(5),
        vec![gear(Location::Park, GearType::Improvised, &["bodyweight"])],
    )
});

pub static SISSY_SQUAT: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        "sissy_squat",
        Some("squat_pattern"),
        Some("knee_dominant"),
        Some(2),
        vec![fixed_equipment(Location::Park, &["dip_station"])],
    )
});

pub static GOBLET_SQUAT: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        "goblet_squat",
        Some("squat_pattern"),
        Some("knee_dominant"),
        None,
        vec![gear(Location::Park, GearType::UserGear, &["kettlebell"])],
    )
});

pub static SPLIT_SQUAT: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        "split_squat",
        Some("split_squat"),
        Some("knee_dominant"),
        Some(3),
        vec![gear(Location::Park, GearType::UserGear, &["resistance_band"])],
    )
});

pub static STEP_UP: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        "step_up",
        Some("step_up"),
        Some("knee_dominant"),
        Some(2),
        vec![gear(Location::Home, GearType::Improvised, &["stairs"])],
    )
});

pub static WALL_SIT: LazyLock<Exercise> = LazyLock::new(|| {
    exercise("wall_sit", Some("wall_sit"), Some("knee_dominant"), Some(1), vec![])
});

pub static LUNGE: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        "lunge",
        Some("lunge"),
        Some("knee_dominant"),
        Some(4),
        vec![gear(Location::Park, GearType::Improvised, &["bodyweight"])],
    )
});

pub static EXERCISES: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
    vec![
        PULL_UP.clone(),
        JUMP_SQUAT.clone(),
        AIR_SQUAT.clone(),
        PISTOL_SQUAT.clone(),
        SISSY_SQUAT.clone(),
        BOX_SQUAT.clone(),
        SPLIT_SQUAT.clone(),
        STEP_UP.clone(),
        WALL_SIT.clone(),
        LUNGE.clone(),
        GOBLET_SQUAT.clone(),
    ]
});
