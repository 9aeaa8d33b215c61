use liftsync_domain as domain;

pub static TEMPLATES: std::sync::LazyLock<Vec<domain::ExerciseTemplate>> =
    std::sync::LazyLock::new(|| vec![TEMPLATE.clone(), TEMPLATE_2.clone()]);

pub static TEMPLATE: std::sync::LazyLock<domain::ExerciseTemplate> =
    std::sync::LazyLock::new(|| domain::ExerciseTemplate {
        id: "D04AC939".into(),
        title: "Squat (Barbell)".to_string(),
        exercise_type: domain::ExerciseType::WeightReps,
        primary_muscle_group: domain::MuscleGroup::Quads,
        secondary_muscle_groups: vec![domain::MuscleGroup::Glutes, domain::MuscleGroup::Back],
        equipment: domain::EquipmentCategory::Barbell,
        is_custom: false,
    });

pub static TEMPLATE_2: std::sync::LazyLock<domain::ExerciseTemplate> =
    std::sync::LazyLock::new(|| domain::ExerciseTemplate {
        id: "0E4F2A9B".into(),
        title: "Pause Squat (3 sec)".to_string(),
        exercise_type: domain::ExerciseType::WeightReps,
        primary_muscle_group: domain::MuscleGroup::Quads,
        secondary_muscle_groups: vec![
            domain::MuscleGroup::Glutes,
            domain::MuscleGroup::Hamstrings,
        ],
        equipment: domain::EquipmentCategory::Barbell,
        is_custom: true,
    });

pub static NEW_TEMPLATE: std::sync::LazyLock<domain::NewExerciseTemplate> =
    std::sync::LazyLock::new(|| {
        domain::catalog::custom_exercise("Pause Squat (3 sec)")
            .map(domain::NewExerciseTemplate::from)
            .unwrap()
    });

pub static FOLDER: std::sync::LazyLock<domain::RoutineFolder> =
    std::sync::LazyLock::new(|| domain::RoutineFolder {
        id: 7.into(),
        title: "Week 1 - 15 Week Periodized Program".to_string(),
    });

pub static ROUTINE: std::sync::LazyLock<domain::Routine> =
    std::sync::LazyLock::new(|| domain::Routine {
        id: uuid::Uuid::from_u128(0xb459_cba5_cd6d_463c_abd6_54f8_eafc_adcb).into(),
        title: "Squat Day".to_string(),
        folder_id: Some(7.into()),
    });

pub static ROUTINE_DRAFT: std::sync::LazyLock<domain::RoutineDraft> =
    std::sync::LazyLock::new(|| domain::RoutineDraft {
        title: "Squat Day".to_string(),
        notes: "Week 1".to_string(),
        exercises: vec![
            domain::RoutineExercise {
                template_id: "D04AC939".into(),
                notes: None,
                sets: vec![
                    domain::Set {
                        weight: domain::SetValue::Value(100.0),
                        reps: domain::SetValue::Value(5),
                    };
                    2
                ],
            },
            domain::RoutineExercise {
                template_id: "3BC06AD3".into(),
                notes: Some("AMRAP".to_string()),
                sets: vec![domain::Set {
                    weight: domain::SetValue::Null,
                    reps: domain::SetValue::Null,
                }],
            },
            domain::RoutineExercise {
                template_id: "B459CBA5".into(),
                notes: None,
                sets: vec![domain::Set {
                    weight: domain::SetValue::Omitted,
                    reps: domain::SetValue::Omitted,
                }],
            },
        ],
    });
