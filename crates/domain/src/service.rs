use log::{debug, error, info};

use crate::{
    CreateError, ExerciseTemplate, ExerciseTemplateRepository, FolderAction, FolderID, Plan,
    ReadError, Routine, RoutineAction, RoutineFolder, RoutineFolderRepository, RoutineID,
    RoutinePlan, RoutineRepository, Snapshot, SyncError, UpdateError,
};

pub struct Service<R> {
    repository: R,
}

/// Counts of the remote objects changed by a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub templates_created: u32,
    pub folders_created: u32,
    pub routines_created: u32,
    pub routines_updated: u32,
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: ExerciseTemplateRepository> Service<R> {
    pub async fn get_exercise_templates(&self) -> Result<Vec<ExerciseTemplate>, ReadError> {
        log_on_error!(
            self.repository.read_exercise_templates(),
            ReadError,
            "get",
            "exercise templates"
        )
    }
}

impl<R: RoutineFolderRepository + RoutineRepository> Service<R> {
    pub async fn get_routine_folders(&self) -> Result<Vec<RoutineFolder>, ReadError> {
        log_on_error!(
            self.repository.read_routine_folders(),
            ReadError,
            "get",
            "routine folders"
        )
    }

    pub async fn get_routines(&self) -> Result<Vec<Routine>, ReadError> {
        log_on_error!(
            self.repository.read_routines(),
            ReadError,
            "get",
            "routines"
        )
    }
}

impl<R: ExerciseTemplateRepository + RoutineFolderRepository + RoutineRepository> Service<R> {
    pub async fn get_snapshot(&self) -> Result<Snapshot, ReadError> {
        let templates = self.get_exercise_templates().await?;
        info!("found {} exercise templates", templates.len());
        let folders = self.get_routine_folders().await?;
        info!("found {} existing folders", folders.len());
        let routines = self.get_routines().await?;
        info!("found {} existing routines", routines.len());
        Ok(Snapshot {
            templates,
            folders,
            routines,
        })
    }

    /// Executes a plan in order and records created objects in `snapshot`.
    ///
    /// Templates are registered first and routine entries referring to their placeholders are
    /// pointed at the registered ids. The first failing call aborts the run. Objects created
    /// before stay in place.
    pub async fn apply(&self, plan: &Plan, snapshot: &mut Snapshot) -> Result<Summary, SyncError> {
        let mut summary = Summary::default();

        let mut registered = Vec::with_capacity(plan.registrations.len());
        for registration in &plan.registrations {
            info!("creating exercise template \"{}\"", registration.template.title);
            let template = log_on_error!(
                self.repository
                    .create_exercise_template(registration.template.clone()),
                CreateError,
                "create",
                "exercise template"
            )?;
            registered.push((registration.placeholder(), template.id.clone()));
            snapshot.add_template(template);
            summary.templates_created += 1;
        }

        for folder in &plan.folders {
            info!("processing {}", folder.title);
            let folder_id = match folder.action {
                FolderAction::Reuse(id) => {
                    info!("folder already exists");
                    id
                }
                FolderAction::Create => {
                    info!("creating folder");
                    let created = log_on_error!(
                        self.repository.create_routine_folder(folder.title.clone()),
                        CreateError,
                        "create",
                        "routine folder"
                    )?;
                    let id = created.id;
                    snapshot.add_folder(created);
                    summary.folders_created += 1;
                    id
                }
            };

            let mut routine_ids: Vec<RoutineID> = Vec::with_capacity(folder.routines.len());
            for routine in &folder.routines {
                let routine = RoutinePlan {
                    draft: routine.draft.with_registered_templates(&registered),
                    action: routine.action,
                };
                let id = self
                    .apply_routine(&routine, folder_id, &routine_ids, snapshot, &mut summary)
                    .await?;
                routine_ids.push(id);
            }
        }

        Ok(summary)
    }

    async fn apply_routine(
        &self,
        routine: &RoutinePlan,
        folder_id: FolderID,
        planned: &[RoutineID],
        snapshot: &mut Snapshot,
        summary: &mut Summary,
    ) -> Result<RoutineID, SyncError> {
        let title = &routine.draft.title;
        let id = match routine.action {
            RoutineAction::Create => {
                info!("creating routine \"{title}\"");
                let created = log_on_error!(
                    self.repository
                        .create_routine(folder_id, routine.draft.clone()),
                    CreateError,
                    "create",
                    "routine"
                )?;
                let id = created.id;
                snapshot.add_routine(created);
                summary.routines_created += 1;
                return Ok(id);
            }
            RoutineAction::Update(id) => id,
            RoutineAction::UpdatePlanned(index) => *planned.get(index).ok_or_else(|| {
                SyncError::Other(format!("no routine planned at position {index}").into())
            })?,
        };

        info!("updating routine \"{title}\"");
        log_on_error!(
            self.repository.update_routine(id, routine.draft.clone()),
            UpdateError,
            "update",
            "routine"
        )?;
        summary.routines_updated += 1;
        Ok(id)
    }
}
