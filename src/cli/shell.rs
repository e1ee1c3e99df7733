use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use otter_refute::{
    context::Context,
    reports::TaskReport,
    structures::{clause::Clause, task::Task},
    types::err::ErrorKind,
};

/// How the clauses (and tasks) given to the cli are used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// The last clause is the goal, and all other clauses are premises.
    Resolution,

    /// All clauses are premises, and each task is performed in turn.
    CookingTest,

    /// As cooking test, followed by tasks read from standard input.
    CookingInteractive,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolution => write!(f, "resolution"),
            Self::CookingTest => write!(f, "cooking_test"),
            Self::CookingInteractive => write!(f, "cooking_interactive"),
        }
    }
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resolution" => Ok(Self::Resolution),

            "cooking_test" => Ok(Self::CookingTest),

            "cooking_interactive" => Ok(Self::CookingInteractive),

            _unkown_string => Err(()),
        }
    }
}

/// Ways a shell may fail.
pub enum ShellError {
    /// Some error from the context.
    Context(ErrorKind),

    /// Output could not be written.
    Output(std::io::ErrorKind),
}

impl From<ErrorKind> for ShellError {
    fn from(e: ErrorKind) -> Self {
        ShellError::Context(e)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(e: std::io::Error) -> Self {
        ShellError::Output(e.kind())
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::Context(e) => write!(f, "Context error: {e}"),
            Self::Output(kind) => write!(f, "Failed to write output: {kind}"),
        }
    }
}

fn write_report(output: &mut impl Write, report: &TaskReport, verbose: bool) -> std::io::Result<()> {
    match verbose {
        true => writeln!(output, "{report}"),
        false => writeln!(output, "{}", report.short_str()),
    }
}

/// Resolves for `goal`, and writes the report.
pub fn resolution(
    context: &mut Context,
    goal: Clause,
    output: &mut impl Write,
    verbose: bool,
) -> Result<(), ShellError> {
    let report = context.resolve(Some(goal), false)?;
    write_report(output, &TaskReport::Inquiry(report), verbose)?;
    Ok(())
}

/// Performs each task, and writes the report of each inquiry.
pub fn cooking_test(
    context: &mut Context,
    tasks: Vec<Task>,
    output: &mut impl Write,
    verbose: bool,
) -> Result<(), ShellError> {
    for task in tasks {
        let report = context.perform(task)?;
        if report.is_inquiry() {
            write_report(output, &report, verbose)?;
        }
    }
    Ok(())
}

/// Performs tasks read from `input` until `exit` (or the end of the input), and writes the report of each task.
pub fn cooking_interactive(
    context: &mut Context,
    mut input: impl BufRead,
    output: &mut impl Write,
    verbose: bool,
) -> Result<(), ShellError> {
    writeln!(output, "Constructed with knowledge:")?;
    for premise in context.knowledge_db.premises() {
        writeln!(output, "> {premise}")?;
    }

    let mut buffer = String::default();

    loop {
        writeln!(output, "Please enter your query.")?;
        output.flush()?;

        buffer.clear();
        match input.read_line(&mut buffer) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let line = buffer.trim_end_matches(&['\n', '\r'][..]);
        if line == "exit" {
            break;
        }
        writeln!(output)?;

        match line.parse::<Task>() {
            Ok(task) => write_report(output, &context.perform(task)?, verbose)?,
            Err(e) => {
                log::debug!("Invalid query: {e}");
                writeln!(output, "Invalid query. Please try again.")?;
                writeln!(output)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use otter_refute::config::Config;

    use super::*;

    fn kitchen() -> Context {
        let premises = ["a", "~a v b"].map(|s| s.parse::<Clause>().expect("clause"));
        Context::from_premises(Config::default(), premises)
    }

    fn session(context: &mut Context, input: &str, verbose: bool) -> String {
        let mut output = Vec::default();
        assert!(cooking_interactive(context, input.as_bytes(), &mut output, verbose).is_ok());
        String::from_utf8(output).expect("utf8")
    }

    #[test]
    fn interactive_until_exit() {
        let mut the_context = kitchen();
        let output = session(&mut the_context, "b ?\nnot a task\nc +\nexit\nc -\n", false);

        let expected = "\
Constructed with knowledge:
> a
> b v ~a
Please enter your query.

b is true
Please enter your query.

Invalid query. Please try again.

Please enter your query.

added c
Please enter your query.
";
        assert_eq!(output, expected);

        // Nothing after exit is performed.
        assert!(the_context.knowledge_db.is_premise(&"c".parse::<Clause>().expect("clause")));
    }

    #[test]
    fn interactive_until_end_of_input() {
        let mut the_context = kitchen();
        let output = session(&mut the_context, "a -\nb ?", false);

        assert!(output.ends_with("removed a\nPlease enter your query.\n\nb is unknown\nPlease enter your query.\n"));
        assert_eq!(the_context.knowledge_db.premises().count(), 1);
    }

    #[test]
    fn cooking_test_writes_inquiries() {
        let mut the_context = kitchen();
        let tasks = ["b ?", "a -", "b ?"].map(|s| s.parse::<Task>().expect("task"));

        let mut output = Vec::default();
        assert!(cooking_test(&mut the_context, tasks.to_vec(), &mut output, false).is_ok());
        assert_eq!(String::from_utf8(output).expect("utf8"), "b is true\nb is unknown\n");
    }

    #[test]
    fn verbose_resolution() {
        let mut the_context = kitchen();
        let goal = "b".parse::<Clause>().expect("clause");

        let mut output = Vec::default();
        assert!(resolution(&mut the_context, goal, &mut output, true).is_ok());

        let output = String::from_utf8(output).expect("utf8");
        assert!(output.starts_with("1. a\n2. b v ~a\n"));
        assert!(output.ends_with("b is true\n"));
    }
}
