use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::{CreateError, ReadError, TemplateID, UpdateError};

#[allow(async_fn_in_trait)]
pub trait RoutineFolderRepository {
    async fn read_routine_folders(&self) -> Result<Vec<RoutineFolder>, ReadError>;
    async fn create_routine_folder(&self, title: String) -> Result<RoutineFolder, CreateError>;
}

#[allow(async_fn_in_trait)]
pub trait RoutineRepository {
    async fn read_routines(&self) -> Result<Vec<Routine>, ReadError>;
    async fn create_routine(
        &self,
        folder_id: FolderID,
        routine: RoutineDraft,
    ) -> Result<Routine, CreateError>;
    /// Replaces title, notes and exercises. The folder of a routine cannot be changed.
    async fn update_routine(
        &self,
        id: RoutineID,
        routine: RoutineDraft,
    ) -> Result<RoutineID, UpdateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineFolder {
    pub id: FolderID,
    pub title: String,
}

#[derive(Deref, Display, Into, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FolderID(u64);

impl From<u64> for FolderID {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A routine as listed by the remote service. Only its natural key is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    pub id: RoutineID,
    pub title: String,
    pub folder_id: Option<FolderID>,
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RoutineID(Uuid);

impl From<Uuid> for RoutineID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// Content written to a routine on creation or update.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutineDraft {
    pub title: String,
    pub notes: String,
    pub exercises: Vec<RoutineExercise>,
}

impl RoutineDraft {
    /// Points placeholder template ids at the templates registered for them.
    ///
    /// `registered` pairs each placeholder with the id assigned by the remote service.
    #[must_use]
    pub fn with_registered_templates(&self, registered: &[(TemplateID, TemplateID)]) -> Self {
        let mut draft = self.clone();
        for exercise in &mut draft.exercises {
            if let Some((_, id)) = registered
                .iter()
                .find(|(placeholder, _)| *placeholder == exercise.template_id)
            {
                exercise.template_id = id.clone();
            }
        }
        draft
    }
}

/// An exercise entry of a routine. Entries are never grouped into supersets.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutineExercise {
    pub template_id: TemplateID,
    pub notes: Option<String>,
    pub sets: Vec<Set>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Set {
    pub weight: SetValue<f64>,
    pub reps: SetValue<u32>,
}

/// A set field can be left out, sent as an explicit null, or carry a value.
///
/// The remote service treats a missing field and a null field differently: a null weight marks a
/// bodyweight set, a null rep count an open-ended one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetValue<T> {
    Omitted,
    Null,
    Value(T),
}
