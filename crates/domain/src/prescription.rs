//! Working sets and notes derived from a program row.

use crate::{Load, MAX_SETS, ParsedExercise, Reps, Set, SetValue};

/// The prescribed sets of an exercise occurrence.
///
/// No sets are prescribed when the set count is zero or above [`MAX_SETS`], or when the athlete
/// selects the weight. All other occurrences get `sets` identical sets.
#[must_use]
pub fn sets(exercise: &ParsedExercise) -> Vec<Set> {
    if exercise.sets == 0 || exercise.sets > MAX_SETS || exercise.weight == Some(Load::Select) {
        return vec![];
    }

    let weight = match exercise.weight {
        Some(Load::Kilograms(kg)) => SetValue::Value(kg),
        Some(Load::Bodyweight) => SetValue::Null,
        Some(Load::Select) | None => SetValue::Omitted,
    };
    let reps = match exercise.reps {
        Some(Reps::Count(count)) => SetValue::Value(count),
        Some(Reps::Amrap | Reps::Easy) => SetValue::Null,
        None => SetValue::Omitted,
    };

    (0..exercise.sets).map(|_| Set { weight, reps }).collect()
}

/// Training max percentage and free-text notes, e.g. `"75% TM - belt"`.
#[must_use]
pub fn base_notes(exercise: &ParsedExercise) -> String {
    let mut parts = vec![];
    if !exercise.percent_tm.is_empty() && exercise.percent_tm != "-" {
        parts.push(format!("{} TM", exercise.percent_tm));
    }
    if !exercise.notes.is_empty() {
        parts.push(exercise.notes.clone());
    }
    parts.join(" - ")
}

/// The annotation attached to the exercise entry of a routine.
///
/// Open-ended rep prescriptions are carried here, as the sets themselves have no rep count.
#[must_use]
pub fn annotation(exercise: &ParsedExercise) -> Option<String> {
    let notes = base_notes(exercise);
    let prefix = match exercise.reps {
        Some(Reps::Amrap) => Some("AMRAP"),
        Some(Reps::Easy) => Some("Easy reps"),
        Some(Reps::Count(_)) | None => None,
    };
    let annotation = match prefix {
        Some(prefix) if notes.is_empty() => prefix.to_string(),
        Some(prefix) => format!("{prefix} - {notes}"),
        None => notes,
    };
    (!annotation.is_empty()).then_some(annotation)
}
