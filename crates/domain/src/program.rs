use std::{collections::BTreeMap, fmt, str::FromStr};

/// Weeks above this number mark the start of the next cycle and are not synchronized.
pub const MAX_WEEK: u32 = 15;
/// Set counts above this read as no value.
pub const MAX_SETS: u32 = 100;

/// One record of the program file. All cells are kept verbatim.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Row {
    pub week: String,
    pub day: String,
    pub exercise: String,
    pub sets: String,
    pub reps: String,
    pub percent_tm: String,
    pub weight: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Load {
    Kilograms(f64),
    Bodyweight,
    /// The athlete picks the weight on the day.
    Select,
}

impl Load {
    #[must_use]
    pub fn parse(cell: &str) -> Option<Self> {
        match cell {
            "BW" => Some(Load::Bodyweight),
            "Select" | "-" => Some(Load::Select),
            _ => cell
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|w| w.is_finite())
                .map(Load::Kilograms),
        }
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Load::Kilograms(kg) => write!(f, "{kg}kg"),
            Load::Bodyweight => write!(f, "BW"),
            Load::Select => write!(f, "?"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reps {
    Count(u32),
    Amrap,
    Easy,
}

impl Reps {
    #[must_use]
    pub fn parse(cell: &str) -> Option<Self> {
        match cell {
            "AMRAP" => Some(Reps::Amrap),
            "Easy" => Some(Reps::Easy),
            "-" => None,
            _ => cell.trim().parse::<u32>().ok().map(Reps::Count),
        }
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reps::Count(count) => write!(f, "{count}"),
            Reps::Amrap => write!(f, "AMRAP"),
            Reps::Easy => write!(f, "Easy"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExercise {
    pub name: String,
    pub sets: u32,
    pub reps: Option<Reps>,
    pub percent_tm: String,
    pub weight: Option<Load>,
    pub notes: String,
}

impl From<&Row> for ParsedExercise {
    fn from(row: &Row) -> Self {
        Self {
            name: row.exercise.clone(),
            sets: row
                .sets
                .trim()
                .parse()
                .ok()
                .filter(|sets| *sets <= MAX_SETS)
                .unwrap_or(0),
            reps: Reps::parse(&row.reps),
            percent_tm: row.percent_tm.clone(),
            weight: Load::parse(&row.weight),
            notes: row.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDay {
    pub code: String,
    pub name: String,
    pub exercises: Vec<ParsedExercise>,
}

impl ParsedDay {
    fn new(label: &str, exercises: Vec<ParsedExercise>) -> Self {
        let mut parts = label.split(" - ");
        let code = parts.next().unwrap_or_default().to_string();
        let name = parts
            .next()
            .filter(|name| !name.is_empty())
            .map_or_else(|| code.clone(), ToString::to_string);
        Self {
            code,
            name,
            exercises,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedWeek {
    pub number: u32,
    pub days: Vec<ParsedDay>,
}

/// Groups rows into weeks and days.
///
/// Days are keyed by their full label, so `"A - Squat Day"` and `"A - Bench Day"` stay apart.
/// Rows with an unparseable week or a week above [`MAX_WEEK`] are dropped.
#[must_use]
pub fn group_rows(rows: &[Row]) -> Vec<ParsedWeek> {
    let mut weeks: BTreeMap<u32, Vec<(&str, Vec<ParsedExercise>)>> = BTreeMap::new();

    for row in rows {
        let Some(number) = parse_week(&row.week) else {
            continue;
        };
        let days = weeks.entry(number).or_default();
        let exercise = ParsedExercise::from(row);
        match days.iter_mut().find(|(label, _)| *label == row.day) {
            Some((_, exercises)) => exercises.push(exercise),
            None => days.push((row.day.as_str(), vec![exercise])),
        }
    }

    weeks
        .into_iter()
        .map(|(number, days)| ParsedWeek {
            number,
            days: days
                .into_iter()
                .map(|(label, exercises)| ParsedDay::new(label, exercises))
                .collect(),
        })
        .collect()
}

fn parse_week(cell: &str) -> Option<u32> {
    cell.trim()
        .parse::<u32>()
        .ok()
        .filter(|week| (1..=MAX_WEEK).contains(week))
}

/// Distinct exercise names in order of first appearance.
#[must_use]
pub fn unique_exercise_names(weeks: &[ParsedWeek]) -> Vec<&str> {
    let mut names: Vec<&str> = vec![];
    for exercise in weeks
        .iter()
        .flat_map(|w| &w.days)
        .flat_map(|d| &d.exercises)
    {
        if !names.contains(&exercise.name.as_str()) {
            names.push(&exercise.name);
        }
    }
    names
}

/// Inclusive range of week numbers selected for processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub first: u32,
    pub last: u32,
}

impl WeekRange {
    #[must_use]
    pub fn contains(&self, week: u32) -> bool {
        (self.first..=self.last).contains(&week)
    }

    #[must_use]
    pub fn select(&self, weeks: Vec<ParsedWeek>) -> Vec<ParsedWeek> {
        weeks.into_iter().filter(|w| self.contains(w.number)).collect()
    }
}

impl FromStr for WeekRange {
    type Err = WeekRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |value: &str| {
            value
                .trim()
                .parse::<u32>()
                .map_err(|_| WeekRangeError::Invalid(s.to_string()))
        };
        let (first, last) = match s.split_once('-') {
            Some((first, last)) => (parse(first)?, parse(last)?),
            None => {
                let week = parse(s)?;
                (week, week)
            }
        };
        if first > last {
            return Err(WeekRangeError::Reversed(first, last));
        }
        Ok(WeekRange { first, last })
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeekRangeError {
    #[error("invalid week selection \"{0}\" (expected N or N-M)")]
    Invalid(String),
    #[error("week range must be ascending ({0} > {1})")]
    Reversed(u32, u32),
}
