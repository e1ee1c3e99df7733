use std::{fs::File, io::BufReader, path::Path};

use otter_refute::{
    builder::{read_clauses, read_tasks},
    structures::{clause::Clause, task::Task},
    types::err::ErrorKind,
};

pub(super) enum ReadError {
    FailedToOpen(String),
    NoGoal,
    ParseError(String, ErrorKind),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::FailedToOpen(path) => write!(f, "Failed to open file '{path}'."),
            Self::NoGoal => write!(f, "Some clause is required as a goal."),
            Self::ParseError(path, err) => write!(f, "Failed to read '{path}': {err}."),
        }
    }
}

fn open(path: &Path) -> Result<BufReader<File>, ReadError> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(_) => Err(ReadError::FailedToOpen(path.display().to_string())),
    }
}

/// Reads the clauses written in the file at `path`.
pub(super) fn clauses_from(path: &Path) -> Result<Vec<Clause>, ReadError> {
    read_clauses(open(path)?).map_err(|e| ReadError::ParseError(path.display().to_string(), e))
}

/// Reads the tasks written in the file at `path`, or no tasks if there is no path.
pub(super) fn tasks_from(path: Option<&Path>) -> Result<Vec<Task>, ReadError> {
    match path {
        None => Ok(Vec::default()),
        Some(path) => {
            read_tasks(open(path)?).map_err(|e| ReadError::ParseError(path.display().to_string(), e))
        }
    }
}
