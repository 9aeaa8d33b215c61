//! Reconciliation of the program with the remote folders and routines.
//!
//! Planning is pure: it compares the program against a [`Snapshot`] of the remote state and
//! describes the operations needed, including the exercise templates to register first. A dry
//! run and a real run therefore share the same plan. Executing a plan is left to the service.

use std::fmt;

use log::info;

use crate::{
    ExerciseMapping, ExerciseMappings, ExerciseTemplate, FolderID, NewExerciseTemplate, ParsedDay,
    ParsedWeek, Routine, RoutineDraft, RoutineExercise, RoutineFolder, RoutineID, TemplateID,
    prescription,
};

/// Remote exercise templates, folders and routines known during a run.
///
/// Starts as a listing of the remote service and grows as objects are created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub templates: Vec<ExerciseTemplate>,
    pub folders: Vec<RoutineFolder>,
    pub routines: Vec<Routine>,
}

impl Snapshot {
    #[must_use]
    pub fn folder(&self, title: &str) -> Option<&RoutineFolder> {
        self.folders.iter().find(|f| f.title == title)
    }

    /// Routines are identified by title and folder.
    #[must_use]
    pub fn routine(&self, title: &str, folder_id: FolderID) -> Option<&Routine> {
        self.routines
            .iter()
            .find(|r| r.title == title && r.folder_id == Some(folder_id))
    }

    pub fn add_template(&mut self, template: ExerciseTemplate) {
        self.templates.push(template);
    }

    pub fn add_folder(&mut self, folder: RoutineFolder) {
        self.folders.push(folder);
    }

    pub fn add_routine(&mut self, routine: Routine) {
        self.routines.push(routine);
    }
}

#[must_use]
pub fn folder_title(program: &str, week: u32) -> String {
    format!("Week {week} - {program}")
}

#[must_use]
pub fn routine_notes(week: u32) -> String {
    format!("Week {week}")
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    pub registrations: Vec<Registration>,
    pub folders: Vec<FolderPlan>,
    pub skipped: Vec<Skipped>,
}

/// An exercise template to register before any routine refers to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub template: NewExerciseTemplate,
}

impl Registration {
    /// The id routine entries of the plan use until the template exists.
    #[must_use]
    pub fn placeholder(&self) -> TemplateID {
        TemplateID::placeholder(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FolderPlan {
    pub week: u32,
    pub title: String,
    pub action: FolderAction,
    pub routines: Vec<RoutinePlan>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderAction {
    Create,
    Reuse(FolderID),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoutinePlan {
    pub draft: RoutineDraft,
    pub action: RoutineAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineAction {
    Create,
    Update(RoutineID),
    /// Update of the routine created by an earlier entry of the same folder plan.
    UpdatePlanned(usize),
}

/// Something of the program that does not reach the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub week: u32,
    pub day: String,
    pub exercise: Option<String>,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Unmapped,
    NoSets,
    NoExercises,
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subject = self.exercise.as_deref().unwrap_or(&self.day);
        match self.reason {
            SkipReason::Unmapped => write!(f, "skipping unmapped exercise: {subject}"),
            SkipReason::NoSets => write!(f, "skipping exercise with no sets: {subject}"),
            SkipReason::NoExercises => {
                write!(f, "no exercises to add, skipping routine: {subject}")
            }
        }
    }
}

impl Plan {
    #[must_use]
    pub fn counts(&self) -> PlanCounts {
        let mut counts = PlanCounts {
            templates_to_create: u32::try_from(self.registrations.len()).unwrap_or(u32::MAX),
            ..PlanCounts::default()
        };
        for folder in &self.folders {
            match folder.action {
                FolderAction::Create => counts.folders_to_create += 1,
                FolderAction::Reuse(_) => counts.folders_reused += 1,
            }
            for routine in &folder.routines {
                match routine.action {
                    RoutineAction::Create => counts.routines_to_create += 1,
                    RoutineAction::Update(_) | RoutineAction::UpdatePlanned(_) => {
                        counts.routines_to_update += 1;
                    }
                }
            }
        }
        counts
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanCounts {
    pub templates_to_create: u32,
    pub folders_to_create: u32,
    pub folders_reused: u32,
    pub routines_to_create: u32,
    pub routines_to_update: u32,
}

/// Plans the template registrations, one folder per week and one routine per day.
///
/// Every name that needs creation is registered. Routine entries of such names refer to the
/// placeholder of their registration. An exercise occurrence is included only if its name has a
/// mapping and it prescribes at least one set. Days without included exercises get no routine.
#[must_use]
pub fn plan(
    weeks: &[ParsedWeek],
    mappings: &ExerciseMappings,
    snapshot: &Snapshot,
    program: &str,
) -> Plan {
    let mut plan = Plan {
        registrations: mappings
            .pending()
            .map(|m| Registration {
                name: m.name.clone(),
                template: m.registration(),
            })
            .collect(),
        ..Plan::default()
    };

    for week in weeks {
        let title = folder_title(program, week.number);
        let action = snapshot
            .folder(&title)
            .map_or(FolderAction::Create, |f| FolderAction::Reuse(f.id));
        let mut routines: Vec<RoutinePlan> = vec![];

        for day in &week.days {
            let exercises = routine_exercises(week.number, day, mappings, &mut plan.skipped);
            if exercises.is_empty() {
                plan.skipped.push(Skipped {
                    week: week.number,
                    day: day.name.clone(),
                    exercise: None,
                    reason: SkipReason::NoExercises,
                });
                continue;
            }

            let existing = match action {
                FolderAction::Reuse(folder_id) => snapshot
                    .routine(&day.name, folder_id)
                    .map(|r| RoutineAction::Update(r.id)),
                FolderAction::Create => None,
            };
            let planned = routines
                .iter()
                .position(|r| r.draft.title == day.name && r.action == RoutineAction::Create)
                .map(RoutineAction::UpdatePlanned);

            routines.push(RoutinePlan {
                draft: RoutineDraft {
                    title: day.name.clone(),
                    notes: routine_notes(week.number),
                    exercises,
                },
                action: existing.or(planned).unwrap_or(RoutineAction::Create),
            });
        }

        plan.folders.push(FolderPlan {
            week: week.number,
            title,
            action,
            routines,
        });
    }

    plan
}

fn routine_exercises(
    week: u32,
    day: &ParsedDay,
    mappings: &ExerciseMappings,
    skipped: &mut Vec<Skipped>,
) -> Vec<RoutineExercise> {
    let mut exercises = vec![];

    for exercise in &day.exercises {
        let skip = |reason| Skipped {
            week,
            day: day.name.clone(),
            exercise: Some(exercise.name.clone()),
            reason,
        };

        let Some(template_id) = mappings
            .get(&exercise.name)
            .map(ExerciseMapping::planned_template_id)
        else {
            skipped.push(skip(SkipReason::Unmapped));
            continue;
        };
        let sets = prescription::sets(exercise);
        if sets.is_empty() {
            skipped.push(skip(SkipReason::NoSets));
            continue;
        }

        exercises.push(RoutineExercise {
            template_id,
            notes: prescription::annotation(exercise),
            sets,
        });
    }

    exercises
}

/// Logs the skipped parts of a plan.
pub fn log_skipped(plan: &Plan) {
    for skipped in &plan.skipped {
        info!("week {} / {}: {skipped}", skipped.week, skipped.day);
    }
}
