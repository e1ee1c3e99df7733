#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::path::PathBuf;

use otter_refute::context::Context;

mod parse;
mod read;
mod shell;

use read::ReadError;
use shell::{Mode, ShellError};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli().get_matches();
    let config = parse::config_from_args(&matches);

    let (Ok(Some(mode)), Ok(Some(clause_path))) = (
        matches.try_get_one::<Mode>("mode"),
        matches.try_get_one::<PathBuf>("clauses"),
    ) else {
        println!("A mode and a file of clauses are required.");
        std::process::exit(1);
    };
    let task_path = matches.try_get_one::<PathBuf>("tasks").ok().flatten();
    let verbose = matches!(matches.try_get_one::<bool>("verbose"), Ok(Some(true)));

    let mut clauses = match read::clauses_from(clause_path) {
        Ok(clauses) => clauses,
        Err(e) => exit_on_read_error(e),
    };

    let mut output = std::io::stdout().lock();

    let result = match mode {
        Mode::Resolution => {
            let Some(goal) = clauses.pop() else {
                exit_on_read_error(ReadError::NoGoal)
            };
            let mut the_context = Context::from_premises(config, clauses);
            shell::resolution(&mut the_context, goal, &mut output, verbose)
        }

        Mode::CookingTest | Mode::CookingInteractive => {
            let tasks = match read::tasks_from(task_path.map(PathBuf::as_path)) {
                Ok(tasks) => tasks,
                Err(e) => exit_on_read_error(e),
            };

            let mut the_context = Context::from_premises(config, clauses);
            match shell::cooking_test(&mut the_context, tasks, &mut output, verbose) {
                Ok(()) if *mode == Mode::CookingInteractive => shell::cooking_interactive(
                    &mut the_context,
                    std::io::stdin().lock(),
                    &mut output,
                    verbose,
                ),
                other => other,
            }
        }
    };

    match result {
        Ok(()) => {}
        Err(e @ ShellError::Context(_)) => {
            println!("{e}");
            std::process::exit(2);
        }
        Err(e @ ShellError::Output(_)) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn exit_on_read_error(error: ReadError) -> ! {
    println!("{error}");
    std::process::exit(1);
}
