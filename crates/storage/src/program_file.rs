//! Program files: a header line followed by one line per exercise occurrence.

use std::{io::Read, path::Path};

use liftsync_domain as domain;
use log::warn;
use serde::Deserialize;

/// Columns read from a program file. Other columns, such as actual reps and RPE, are ignored.
pub const COLUMNS: [&str; 8] = [
    "WEEK",
    "DAY",
    "EXERCISE",
    "SETS",
    "REPS",
    "% TM",
    "WEIGHT (kg)",
    "NOTES",
];

#[derive(thiserror::Error, Debug)]
pub enum ProgramFileError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Row {
    #[serde(rename = "WEEK")]
    week: String,
    #[serde(rename = "DAY")]
    day: String,
    #[serde(rename = "EXERCISE")]
    exercise: String,
    #[serde(rename = "SETS")]
    sets: String,
    #[serde(rename = "REPS")]
    reps: String,
    #[serde(rename = "% TM")]
    percent_tm: String,
    #[serde(rename = "WEIGHT (kg)")]
    weight: String,
    #[serde(rename = "NOTES")]
    notes: String,
}

impl From<Row> for domain::Row {
    fn from(value: Row) -> Self {
        Self {
            week: value.week,
            day: value.day,
            exercise: value.exercise,
            sets: value.sets,
            reps: value.reps,
            percent_tm: value.percent_tm,
            weight: value.weight,
            notes: value.notes,
        }
    }
}

pub fn read_rows(path: &Path) -> Result<Vec<domain::Row>, ProgramFileError> {
    let file = std::fs::File::open(path).map_err(|source| ProgramFileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_rows(file)
}

/// Missing columns read as empty cells.
pub fn parse_rows<R: Read>(reader: R) -> Result<Vec<domain::Row>, ProgramFileError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?;
    for column in COLUMNS {
        if !headers.iter().any(|h| h == column) {
            warn!("program file has no \"{column}\" column");
        }
    }

    reader
        .deserialize::<Row>()
        .map(|row| Ok(row?.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_rows() {
        let data = "\
WEEK,DAY,EXERCISE,SETS,REPS,% TM,WEIGHT (kg),ACTUAL REPS,RPE,NOTES
1,A - Squat Day,Back Squat,5,5,70%,100,,,
1,A - Squat Day,\"Spoto Press (1\"\" pause)\",3,AMRAP,85%,80,,,last set

16,A - Squat Day,UPDATE TRAINING MAXES,-,-,-,-,,,
";

        assert_eq!(
            parse_rows(data.as_bytes()).unwrap(),
            vec![
                domain::Row {
                    week: "1".to_string(),
                    day: "A - Squat Day".to_string(),
                    exercise: "Back Squat".to_string(),
                    sets: "5".to_string(),
                    reps: "5".to_string(),
                    percent_tm: "70%".to_string(),
                    weight: "100".to_string(),
                    notes: String::new(),
                },
                domain::Row {
                    week: "1".to_string(),
                    day: "A - Squat Day".to_string(),
                    exercise: "Spoto Press (1\" pause)".to_string(),
                    sets: "3".to_string(),
                    reps: "AMRAP".to_string(),
                    percent_tm: "85%".to_string(),
                    weight: "80".to_string(),
                    notes: "last set".to_string(),
                },
                domain::Row {
                    week: "16".to_string(),
                    day: "A - Squat Day".to_string(),
                    exercise: "UPDATE TRAINING MAXES".to_string(),
                    sets: "-".to_string(),
                    reps: "-".to_string(),
                    percent_tm: "-".to_string(),
                    weight: "-".to_string(),
                    notes: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_rows_missing_columns() {
        let data = "\
WEEK,DAY,EXERCISE,SETS,REPS
2,B - Bench Day,Bench Press,3,8
2,B - Bench Day,Plank
";

        let rows = parse_rows(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].reps, "8");
        assert_eq!(rows[0].weight, "");
        assert_eq!(rows[0].percent_tm, "");
        assert_eq!(rows[1].exercise, "Plank");
        assert_eq!(rows[1].sets, "");
    }

    #[test]
    fn test_parse_rows_empty() {
        assert_eq!(parse_rows("".as_bytes()).unwrap(), vec![]);
    }

    #[test]
    fn test_read_rows_missing_file() {
        assert!(matches!(
            read_rows(Path::new("/nonexistent/program.csv")),
            Err(ProgramFileError::Io { .. })
        ));
    }
}
