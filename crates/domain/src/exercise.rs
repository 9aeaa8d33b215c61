use derive_more::{AsRef, Deref, Display};

use crate::{CreateError, ReadError};

#[allow(async_fn_in_trait)]
pub trait ExerciseTemplateRepository {
    async fn read_exercise_templates(&self) -> Result<Vec<ExerciseTemplate>, ReadError>;
    async fn create_exercise_template(
        &self,
        template: NewExerciseTemplate,
    ) -> Result<ExerciseTemplate, CreateError>;
}

/// A canonical exercise known to the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseTemplate {
    pub id: TemplateID,
    pub title: String,
    pub exercise_type: ExerciseType,
    pub primary_muscle_group: MuscleGroup,
    pub secondary_muscle_groups: Vec<MuscleGroup>,
    pub equipment: EquipmentCategory,
    pub is_custom: bool,
}

impl From<(TemplateID, NewExerciseTemplate)> for ExerciseTemplate {
    fn from((id, template): (TemplateID, NewExerciseTemplate)) -> Self {
        Self {
            id,
            title: template.title,
            exercise_type: template.exercise_type,
            primary_muscle_group: template.muscle_group,
            secondary_muscle_groups: template.other_muscles,
            equipment: template.equipment,
            is_custom: true,
        }
    }
}

#[derive(AsRef, Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TemplateID(String);

impl TemplateID {
    /// Stands in for the template of `name` until it is registered.
    #[must_use]
    pub fn placeholder(name: &str) -> Self {
        Self(format!("new:{name}"))
    }
}

impl From<&str> for TemplateID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TemplateID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Payload for registering a custom exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExerciseTemplate {
    pub title: String,
    pub exercise_type: ExerciseType,
    pub muscle_group: MuscleGroup,
    pub other_muscles: Vec<MuscleGroup>,
    pub equipment: EquipmentCategory,
}

impl NewExerciseTemplate {
    /// Registration used for names without a custom definition.
    #[must_use]
    pub fn generic(title: &str) -> Self {
        Self {
            title: title.to_string(),
            exercise_type: ExerciseType::WeightReps,
            muscle_group: MuscleGroup::Other,
            other_muscles: vec![],
            equipment: EquipmentCategory::Other,
        }
    }
}

#[derive(strum::Display, strum::EnumString, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum ExerciseType {
    #[default]
    WeightReps,
    BodyweightReps,
    WeightedBodyweight,
    Duration,
    DistanceDuration,
    WeightDistance,
}

/// Muscle groups in the program's own vocabulary.
///
/// The remote service names some groups differently; parsing accepts both spellings and
/// [`MuscleGroup::remote_name`] translates back.
#[derive(strum::Display, strum::EnumString, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    #[strum(to_string = "back", serialize = "lats", serialize = "upper_back", serialize = "lower_back")]
    Back,
    Shoulders,
    Biceps,
    Triceps,
    #[strum(to_string = "quads", serialize = "quadriceps")]
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    #[strum(to_string = "abs", serialize = "abdominals")]
    Abs,
    Forearms,
    #[default]
    Other,
    FullBody,
    Cardio,
}

impl MuscleGroup {
    #[must_use]
    pub fn remote_name(self) -> &'static str {
        match self {
            MuscleGroup::Quads => "quadriceps",
            MuscleGroup::Hamstrings => "hamstrings",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Calves => "calves",
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "lats",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Abs => "abdominals",
            MuscleGroup::Forearms => "forearms",
            MuscleGroup::Other | MuscleGroup::FullBody | MuscleGroup::Cardio => "other",
        }
    }
}

#[derive(strum::Display, strum::EnumString, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum EquipmentCategory {
    Barbell,
    Dumbbell,
    Machine,
    Cable,
    Bodyweight,
    #[default]
    Other,
    WeightedBodyweight,
    #[strum(to_string = "band", serialize = "resistance_band")]
    Band,
    Cardio,
    None,
}

impl EquipmentCategory {
    /// The remote service has no cable category and calls bodyweight `none`.
    #[must_use]
    pub fn remote_name(self) -> &'static str {
        match self {
            EquipmentCategory::Barbell => "barbell",
            EquipmentCategory::Dumbbell => "dumbbell",
            EquipmentCategory::Machine | EquipmentCategory::Cable => "machine",
            EquipmentCategory::Bodyweight => "none",
            EquipmentCategory::Other
            | EquipmentCategory::WeightedBodyweight
            | EquipmentCategory::Band
            | EquipmentCategory::Cardio
            | EquipmentCategory::None => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::local("quads", MuscleGroup::Quads)]
    #[case::remote("quadriceps", MuscleGroup::Quads)]
    #[case::lats("lats", MuscleGroup::Back)]
    #[case::lower_back("lower_back", MuscleGroup::Back)]
    #[case::abdominals("abdominals", MuscleGroup::Abs)]
    #[case::full_body("full_body", MuscleGroup::FullBody)]
    fn test_muscle_group_from_str(#[case] value: &str, #[case] expected: MuscleGroup) {
        assert_eq!(value.parse::<MuscleGroup>(), Ok(expected));
    }

    #[test]
    fn test_muscle_group_unknown() {
        assert!("neck".parse::<MuscleGroup>().is_err());
        assert_eq!(
            "neck".parse::<MuscleGroup>().unwrap_or_default(),
            MuscleGroup::Other
        );
    }

    #[rstest]
    #[case(MuscleGroup::Quads, "quadriceps")]
    #[case(MuscleGroup::Back, "lats")]
    #[case(MuscleGroup::Abs, "abdominals")]
    #[case(MuscleGroup::Chest, "chest")]
    #[case(MuscleGroup::FullBody, "other")]
    fn test_muscle_group_remote_name(#[case] muscle: MuscleGroup, #[case] expected: &str) {
        assert_eq!(muscle.remote_name(), expected);
    }

    #[rstest]
    #[case(EquipmentCategory::Cable, "machine")]
    #[case(EquipmentCategory::Bodyweight, "none")]
    #[case(EquipmentCategory::Barbell, "barbell")]
    #[case(EquipmentCategory::Band, "other")]
    fn test_equipment_remote_name(#[case] equipment: EquipmentCategory, #[case] expected: &str) {
        assert_eq!(equipment.remote_name(), expected);
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        assert_eq!(ExerciseType::BodyweightReps.to_string(), "bodyweight_reps");
        assert_eq!(
            "weighted_bodyweight".parse::<ExerciseType>(),
            Ok(ExerciseType::WeightedBodyweight)
        );
        assert_eq!(MuscleGroup::Quads.to_string(), "quads");
        assert_eq!(EquipmentCategory::Band.to_string(), "band");
        assert_eq!(
            "resistance_band".parse::<EquipmentCategory>(),
            Ok(EquipmentCategory::Band)
        );
    }

    #[test]
    fn test_exercise_template_from_registration() {
        assert_eq!(
            ExerciseTemplate::from((
                TemplateID::from("ABC"),
                NewExerciseTemplate::generic("Sled Push")
            )),
            ExerciseTemplate {
                id: "ABC".into(),
                title: "Sled Push".to_string(),
                exercise_type: ExerciseType::WeightReps,
                primary_muscle_group: MuscleGroup::Other,
                secondary_muscle_groups: vec![],
                equipment: EquipmentCategory::Other,
                is_custom: true,
            }
        );
    }
}
