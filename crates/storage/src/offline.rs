//! Repository for runs without credentials.
//!
//! Listings are empty and every mutation fails, so a plan computed against it describes a
//! complete first synchronization.

use liftsync_domain as domain;

#[derive(Debug, Default, Clone, Copy)]
pub struct Offline;

impl domain::ExerciseTemplateRepository for Offline {
    async fn read_exercise_templates(
        &self,
    ) -> Result<Vec<domain::ExerciseTemplate>, domain::ReadError> {
        Ok(vec![])
    }

    async fn create_exercise_template(
        &self,
        _: domain::NewExerciseTemplate,
    ) -> Result<domain::ExerciseTemplate, domain::CreateError> {
        Err(domain::StorageError::NoConnection.into())
    }
}

impl domain::RoutineFolderRepository for Offline {
    async fn read_routine_folders(&self) -> Result<Vec<domain::RoutineFolder>, domain::ReadError> {
        Ok(vec![])
    }

    async fn create_routine_folder(
        &self,
        _: String,
    ) -> Result<domain::RoutineFolder, domain::CreateError> {
        Err(domain::StorageError::NoConnection.into())
    }
}

impl domain::RoutineRepository for Offline {
    async fn read_routines(&self) -> Result<Vec<domain::Routine>, domain::ReadError> {
        Ok(vec![])
    }

    async fn create_routine(
        &self,
        _: domain::FolderID,
        _: domain::RoutineDraft,
    ) -> Result<domain::Routine, domain::CreateError> {
        Err(domain::StorageError::NoConnection.into())
    }

    async fn update_routine(
        &self,
        _: domain::RoutineID,
        _: domain::RoutineDraft,
    ) -> Result<domain::RoutineID, domain::UpdateError> {
        Err(domain::StorageError::NoConnection.into())
    }
}

#[cfg(test)]
mod tests {
    use liftsync_domain::{
        ExerciseMappings, ExerciseTemplateRepository, MatchPolicy, PlanCounts,
        RoutineFolderRepository, RoutineRepository, Row, Service, TemplateID,
    };
    use pretty_assertions::assert_eq;

    use crate::tests::data::{FOLDER, NEW_TEMPLATE, ROUTINE, ROUTINE_DRAFT};

    use super::*;

    #[tokio::test]
    async fn test_reads_are_empty() {
        assert!(Offline.read_exercise_templates().await.unwrap().is_empty());
        assert!(Offline.read_routine_folders().await.unwrap().is_empty());
        assert!(Offline.read_routines().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mutations_fail() {
        assert!(matches!(
            Offline.create_exercise_template(NEW_TEMPLATE.clone()).await,
            Err(domain::CreateError::Storage(
                domain::StorageError::NoConnection
            ))
        ));
        assert!(matches!(
            Offline.create_routine_folder(FOLDER.title.clone()).await,
            Err(domain::CreateError::Storage(
                domain::StorageError::NoConnection
            ))
        ));
        assert!(matches!(
            Offline.create_routine(FOLDER.id, ROUTINE_DRAFT.clone()).await,
            Err(domain::CreateError::Storage(
                domain::StorageError::NoConnection
            ))
        ));
        assert!(matches!(
            Offline.update_routine(ROUTINE.id, ROUTINE_DRAFT.clone()).await,
            Err(domain::UpdateError::Storage(
                domain::StorageError::NoConnection
            ))
        ));
    }

    fn row(day: &str, exercise: &str, sets: &str, reps: &str, weight: &str) -> Row {
        Row {
            week: "1".to_string(),
            day: day.to_string(),
            exercise: exercise.to_string(),
            sets: sets.to_string(),
            reps: reps.to_string(),
            percent_tm: String::new(),
            weight: weight.to_string(),
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn test_plan_describes_first_synchronization() {
        let weeks = domain::group_rows(&[
            row("A - Squat Day", "Pause Squat (3 sec)", "3", "3", "80"),
            row("B - Bench Day", "Back Squat", "5", "5", "100"),
        ]);
        let snapshot = Service::new(Offline).get_snapshot().await.unwrap();
        let mappings = ExerciseMappings::build(
            domain::unique_exercise_names(&weeks),
            &snapshot.templates,
            &MatchPolicy::default(),
        );

        let plan = domain::plan(&weeks, &mappings, &snapshot, "Program");

        assert_eq!(
            plan.counts(),
            PlanCounts {
                templates_to_create: 2,
                folders_to_create: 1,
                folders_reused: 0,
                routines_to_create: 2,
                routines_to_update: 0,
            }
        );
        assert_eq!(
            plan.folders[0]
                .routines
                .iter()
                .map(|r| r.draft.exercises[0].template_id.clone())
                .collect::<Vec<_>>(),
            vec![
                TemplateID::placeholder("Pause Squat (3 sec)"),
                TemplateID::placeholder("Back Squat"),
            ]
        );
        assert_eq!(plan.skipped, vec![]);
    }
}
