//! Reference data for exercise resolution.
//!
//! The tables are fixed at compile time and never modified at runtime.

use crate::{EquipmentCategory, ExerciseType, MuscleGroup, NewExerciseTemplate};

/// An exercise variant the program uses that the remote catalog does not ship by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomExercise {
    pub title: &'static str,
    pub exercise_type: ExerciseType,
    pub equipment: EquipmentCategory,
    pub primary_muscle: MuscleGroup,
    pub secondary_muscles: &'static [MuscleGroup],
}

impl From<&CustomExercise> for NewExerciseTemplate {
    fn from(value: &CustomExercise) -> Self {
        Self {
            title: value.title.to_string(),
            exercise_type: value.exercise_type,
            muscle_group: value.primary_muscle,
            other_muscles: value.secondary_muscles.to_vec(),
            equipment: value.equipment,
        }
    }
}

pub const CUSTOM_EXERCISES: [CustomExercise; 27] = [
    CustomExercise {
        title: "Pause Squat (3 sec)",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Quads,
        secondary_muscles: &[MuscleGroup::Glutes, MuscleGroup::Hamstrings],
    },
    CustomExercise {
        title: "Pause Squat (2 sec)",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Quads,
        secondary_muscles: &[MuscleGroup::Glutes, MuscleGroup::Hamstrings],
    },
    CustomExercise {
        title: "Pause Squat (1 sec)",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Quads,
        secondary_muscles: &[MuscleGroup::Glutes, MuscleGroup::Hamstrings],
    },
    CustomExercise {
        title: "Larsen Press (feet up)",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Chest,
        secondary_muscles: &[MuscleGroup::Triceps, MuscleGroup::Shoulders],
    },
    CustomExercise {
        title: "Spoto Press (1\" pause)",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Chest,
        secondary_muscles: &[MuscleGroup::Triceps, MuscleGroup::Shoulders],
    },
    CustomExercise {
        title: "Deficit Deadlift (5cm)",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Back,
        secondary_muscles: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes],
    },
    CustomExercise {
        title: "Deficit Deadlift (2.5cm)",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Back,
        secondary_muscles: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes],
    },
    CustomExercise {
        title: "Paused Deadlift (below knee)",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Back,
        secondary_muscles: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes],
    },
    CustomExercise {
        title: "Close Grip Bench",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Triceps,
        secondary_muscles: &[MuscleGroup::Chest, MuscleGroup::Shoulders],
    },
    CustomExercise {
        title: "Inverted Row (Rings)",
        exercise_type: ExerciseType::BodyweightReps,
        equipment: EquipmentCategory::Other,
        primary_muscle: MuscleGroup::Back,
        secondary_muscles: &[MuscleGroup::Biceps],
    },
    CustomExercise {
        title: "Cable Crunch",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Cable,
        primary_muscle: MuscleGroup::Abs,
        secondary_muscles: &[],
    },
    CustomExercise {
        title: "Face Pull",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Cable,
        primary_muscle: MuscleGroup::Shoulders,
        secondary_muscles: &[MuscleGroup::Back],
    },
    CustomExercise {
        title: "Pec Deck",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Machine,
        primary_muscle: MuscleGroup::Chest,
        secondary_muscles: &[],
    },
    CustomExercise {
        title: "Back Squat (backoff)",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Quads,
        secondary_muscles: &[MuscleGroup::Glutes, MuscleGroup::Hamstrings],
    },
    CustomExercise {
        title: "Bench Press (backoff)",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Chest,
        secondary_muscles: &[MuscleGroup::Triceps, MuscleGroup::Shoulders],
    },
    CustomExercise {
        title: "Deadlift (backoff)",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Back,
        secondary_muscles: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes],
    },
    CustomExercise {
        title: "Light Squat",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Quads,
        secondary_muscles: &[MuscleGroup::Glutes, MuscleGroup::Hamstrings],
    },
    CustomExercise {
        title: "Light Bench",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Chest,
        secondary_muscles: &[MuscleGroup::Triceps, MuscleGroup::Shoulders],
    },
    CustomExercise {
        title: "Light Deadlift",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Back,
        secondary_muscles: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes],
    },
    CustomExercise {
        title: "Back Squat - NEW 1RM",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Quads,
        secondary_muscles: &[MuscleGroup::Glutes, MuscleGroup::Hamstrings],
    },
    CustomExercise {
        title: "Bench Press - NEW 1RM",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Chest,
        secondary_muscles: &[MuscleGroup::Triceps, MuscleGroup::Shoulders],
    },
    CustomExercise {
        title: "Deadlift - NEW 1RM",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Back,
        secondary_muscles: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes],
    },
    CustomExercise {
        title: "Optional: 2nd attempt",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Barbell,
        primary_muscle: MuscleGroup::Other,
        secondary_muscles: &[],
    },
    CustomExercise {
        title: "Light accessories",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Other,
        primary_muscle: MuscleGroup::Other,
        secondary_muscles: &[],
    },
    CustomExercise {
        title: "Light accessories only",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Other,
        primary_muscle: MuscleGroup::Other,
        secondary_muscles: &[],
    },
    CustomExercise {
        title: "Tricep Extension",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Cable,
        primary_muscle: MuscleGroup::Triceps,
        secondary_muscles: &[],
    },
    CustomExercise {
        title: "Cable Row",
        exercise_type: ExerciseType::WeightReps,
        equipment: EquipmentCategory::Cable,
        primary_muscle: MuscleGroup::Back,
        secondary_muscles: &[MuscleGroup::Biceps],
    },
];

/// Program names whose wording differs from the canonical title in the remote catalog.
pub const OVERRIDES: [(&str, &str); 16] = [
    ("Back Squat", "Barbell Squat"),
    ("Bench Press", "Barbell Bench Press"),
    ("Deadlift", "Deadlift (Barbell)"),
    ("Romanian Deadlift", "Romanian Deadlift (Barbell)"),
    ("Leg Press", "Leg Press (Machine)"),
    ("Leg Extension", "Leg Extension (Machine)"),
    ("Pull Up", "Pull Up"),
    ("Chest Dip", "Dip"),
    ("Incline DB Press", "Incline Dumbbell Bench Press"),
    ("Seated Cable Row", "Seated Cable Row"),
    ("Barbell Curl", "Barbell Curl"),
    ("Barbell Row", "Barbell Row"),
    ("Front Squat", "Front Squat (Barbell)"),
    ("Lateral Raise", "Lateral Raise (Dumbbell)"),
    ("Hanging Leg Raise", "Hanging Leg Raise"),
    ("Tricep Extension (Cable)", "Triceps Pushdown"),
];

/// Rows carrying these names are administrative markers, not exercises.
pub const MARKERS: [&str; 3] = ["-", "UPDATE TRAINING MAXES", "Begin next 16-week cycle"];

#[must_use]
pub fn custom_exercise(title: &str) -> Option<&'static CustomExercise> {
    CUSTOM_EXERCISES
        .iter()
        .find(|c| same_title(c.title, title))
}

#[must_use]
pub fn override_title(name: &str) -> Option<&'static str> {
    OVERRIDES
        .iter()
        .find(|(from, _)| same_title(from, name))
        .map(|(_, to)| *to)
}

/// Title comparison shared by all table and catalog lookups.
#[must_use]
pub fn same_title(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[must_use]
pub fn is_marker(name: &str) -> bool {
    name.trim().is_empty() || MARKERS.contains(&name)
}
