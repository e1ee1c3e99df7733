#![allow(dead_code)]

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use otter_refute::{
    builder::{read_clauses, read_tasks},
    config::{Config, ControlStrategy},
    context::Context,
    reports::ResolutionReport,
    structures::{clause::Clause, task::Task},
};

pub fn data_subdir(dirs: Vec<&str>) -> PathBuf {
    let mut path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data");
    for dir in dirs {
        path = path.join(dir);
    }
    path
}

pub fn clauses_at(path: &Path) -> Vec<Clause> {
    let file = match File::open(path) {
        Err(_) => panic!("Could not load {path:?}"),
        Ok(f) => f,
    };

    match read_clauses(BufReader::new(&file)) {
        Ok(clauses) => clauses,
        Err(e) => panic!("Failed to read {path:?}: {e}"),
    }
}

pub fn tasks_at(path: &Path) -> Vec<Task> {
    let file = match File::open(path) {
        Err(_) => panic!("Could not load {path:?}"),
        Ok(f) => f,
    };

    match read_tasks(BufReader::new(&file)) {
        Ok(tasks) => tasks,
        Err(e) => panic!("Failed to read {path:?}: {e}"),
    }
}

pub fn config_with(strategy: ControlStrategy) -> Config {
    let mut config = Config::default();
    config.control_strategy.value = strategy;
    config
}

/// Resolves for the last clause of the file at `path`, with all other clauses as premises.
pub fn resolution_report(path: &Path, config: &Config) -> ResolutionReport {
    let mut clauses = clauses_at(path);
    let Some(goal) = clauses.pop() else {
        panic!("No goal in {path:?}");
    };

    let mut ctx = Context::from_premises(config.clone(), clauses);
    match ctx.resolve(Some(goal), false) {
        Ok(report) => report,
        Err(e) => panic!("{e:?}"),
    }
}

/// Requires the goal of each file in `subdir` to be true, or not, on the config.
///
/// Returns a count of the files examined.
pub fn silent_on_directory(subdir: PathBuf, config: &Config, require_true: bool) -> usize {
    let dir_info = match std::fs::read_dir(&subdir) {
        Ok(info) => info,
        Err(e) => panic!("Could not read {subdir:?}: {e}"),
    };

    let mut count = 0;
    for entry in dir_info.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|extension| extension == "txt") {
            let report = resolution_report(&path, config);
            assert_eq!(report.goal_is_true(), require_true, "{path:?}");
            count += 1;
        }
    }

    count
}
