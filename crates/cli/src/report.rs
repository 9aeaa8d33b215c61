//! Text shown to the user at the end of a run.

use liftsync_domain::{
    self as domain, ExerciseMapping, ExerciseMappings, FolderAction, ParsedExercise, ParsedWeek,
    Plan, RoutineAction, Summary, catalog, prescription,
};
use log::{info, warn};

#[must_use]
pub fn exercise_line(exercise: &ParsedExercise) -> String {
    let reps = exercise
        .reps
        .map_or_else(|| "?".to_string(), |reps| reps.to_string());
    let weight = exercise
        .weight
        .map_or_else(|| "?".to_string(), |weight| weight.to_string());
    let notes = prescription::base_notes(exercise);
    let mut line = format!("{}: {}x{reps} @ {weight}", exercise.name, exercise.sets);
    if !notes.is_empty() {
        line.push_str(&format!(" ({notes})"));
    }
    line
}

#[must_use]
pub fn mapping_line(mapping: &ExerciseMapping) -> String {
    if mapping.needs_creation() {
        format!("{} (new custom exercise)", mapping.name)
    } else if mapping.custom {
        format!("{} -> {} (custom)", mapping.name, mapping.title)
    } else if mapping.confidence < 1.0 {
        format!(
            "{} -> {} ({:.0}% match)",
            mapping.name,
            mapping.title,
            mapping.confidence * 100.0
        )
    } else {
        format!("{} -> {}", mapping.name, mapping.title)
    }
}

/// Approximate matches are logged as warnings, as they are worth a manual check.
pub fn log_mappings(mappings: &ExerciseMappings) {
    for mapping in mappings.iter() {
        if mapping.custom || mapping.confidence >= 1.0 {
            info!("{}", mapping_line(mapping));
        } else {
            warn!("{}", mapping_line(mapping));
        }
    }
}

#[must_use]
pub fn simulation(weeks: &[ParsedWeek], mappings: &ExerciseMappings, plan: &Plan) -> String {
    let mut lines = vec![format!("Exercises to map ({}):", mappings.len())];
    for mapping in mappings.iter() {
        if catalog::custom_exercise(&mapping.name).is_some() {
            lines.push(format!("  {} [custom]", mapping.name));
        } else {
            lines.push(format!("  {}", mapping.name));
        }
    }

    lines.push(format!(
        "Exercise templates to create ({}):",
        plan.registrations.len()
    ));
    for registration in &plan.registrations {
        let template = &registration.template;
        lines.push(format!(
            "  {} ({}, {})",
            template.title, template.muscle_group, template.equipment
        ));
    }

    lines.push("Folders:".to_string());
    for folder in &plan.folders {
        match folder.action {
            FolderAction::Create => lines.push(format!("  create \"{}\"", folder.title)),
            FolderAction::Reuse(id) => lines.push(format!("  reuse \"{}\" ({id})", folder.title)),
        }
    }

    for week in weeks {
        lines.push(format!("Week {}:", week.number));
        for day in &week.days {
            lines.push(format!("  {} ({} exercises)", day.name, day.exercises.len()));
            for exercise in &day.exercises {
                lines.push(format!("    {}", exercise_line(exercise)));
            }
        }
    }

    lines.push("Operations:".to_string());
    for folder in &plan.folders {
        for routine in &folder.routines {
            let verb = match routine.action {
                RoutineAction::Create => "create",
                RoutineAction::Update(_) | RoutineAction::UpdatePlanned(_) => "update",
            };
            lines.push(format!(
                "  {verb} routine \"{}\" in \"{}\" ({} exercises)",
                routine.draft.title,
                folder.title,
                routine.draft.exercises.len()
            ));
        }
    }
    for skipped in &plan.skipped {
        lines.push(format!("  week {}: {skipped}", skipped.week));
    }

    let counts = plan.counts();
    lines.push(format!(
        "{} exercise templates to create, {} folders to create, {} to reuse, \
         {} routines to create, {} to update",
        counts.templates_to_create,
        counts.folders_to_create,
        counts.folders_reused,
        counts.routines_to_create,
        counts.routines_to_update
    ));
    lines.join("\n")
}

#[must_use]
pub fn summary(summary: &Summary) -> String {
    [
        "Synchronization complete".to_string(),
        format!("  folders created: {}", summary.folders_created),
        format!("  routines created: {}", summary.routines_created),
        format!("  routines updated: {}", summary.routines_updated),
        format!("  exercise templates created: {}", summary.templates_created),
    ]
    .join("\n")
}

/// The week range line shown before synchronizing.
#[must_use]
pub fn selection(weeks: &[ParsedWeek]) -> String {
    match (weeks.first(), weeks.last()) {
        (Some(first), Some(last)) if first.number == last.number => {
            format!("week {}", first.number)
        }
        (Some(first), Some(last)) => format!("weeks {}-{}", first.number, last.number),
        _ => format!("no weeks between 1 and {}", domain::MAX_WEEK),
    }
}
