/*!
Tools for building a context.

# Basic methods

The library has a few basic methods for building a context:
- [from_premises](crate::context::Context::from_premises), to create a context with some premises.
- [add_premise](crate::db::knowledge::KnowledgeDB::add_premise), to add a premise to a context.
- [read_premises](crate::context::Context::read_premises), to add the premises written in some file to a context.

Clauses and tasks may be parsed from strings, through [FromStr](std::str::FromStr) (see [text] for details).

# Files

Files contain one clause, or one task, on each line.
Lines beginning with `#` are comments, and blank lines are skipped.

```rust
# use otter_refute::builder::read_clauses;
# use otter_refute::context::Context;
# use otter_refute::config::Config;
# use std::io::Write;
let mut file = vec![];
let _ = file.write(b"
## Pasta
pasta v ~cheese

cheese
");

let clauses = read_clauses(file.as_slice()).unwrap();
assert_eq!(clauses.len(), 2);

let mut the_context = Context::from_config(Config::default());
assert_eq!(the_context.read_premises(file.as_slice()), Ok(2));
```
*/

pub mod text;

use std::{io::BufRead, str::FromStr};

use crate::{
    context::Context,
    misc::log::targets,
    structures::{clause::Clause, task::Task},
    types::err::{self},
};

/// The character which begins a comment line.
pub const COMMENT: char = '#';

/// Reads every line of `reader` which is not blank or a comment as a `T`.
///
/// Errors note the (1-indexed) line at which the error occurred.
fn read_lines<T: FromStr<Err = err::ParseError>>(
    mut reader: impl BufRead,
) -> Result<Vec<T>, err::ErrorKind> {
    let mut buffer = String::with_capacity(1024);
    let mut line_counter = 0;
    let mut items = Vec::default();

    loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => {
                let error = err::ParseError::Unreadable;
                return Err(err::ErrorKind::from(err::ParseError::Line(line_counter + 1, Box::new(error))));
            }
        }

        let line = buffer.trim();
        if line.is_empty() || line.starts_with(COMMENT) {
            continue;
        }

        match line.parse::<T>() {
            Ok(item) => items.push(item),
            Err(e) => {
                log::trace!(target: targets::PARSE, "Failed to parse line {line_counter}: {line}");
                return Err(err::ErrorKind::from(err::ParseError::Line(line_counter, Box::new(e))));
            }
        }
    }

    log::debug!(target: targets::PARSE, "Read {} items from {line_counter} lines", items.len());
    Ok(items)
}

/// Reads clauses, one to a line.
pub fn read_clauses(reader: impl BufRead) -> Result<Vec<Clause>, err::ErrorKind> {
    read_lines(reader)
}

/// Reads tasks, one to a line.
pub fn read_tasks(reader: impl BufRead) -> Result<Vec<Task>, err::ErrorKind> {
    read_lines(reader)
}

impl Context {
    /// Reads clauses, one to a line, and adds each clause as a premise.
    ///
    /// Returns a count of the clauses read.
    /// If some line fails to parse, no premise is added.
    pub fn read_premises(&mut self, reader: impl BufRead) -> Result<usize, err::ErrorKind> {
        let clauses = read_clauses(reader)?;
        let count = clauses.len();

        for clause in clauses {
            self.knowledge_db.add_premise(clause);
        }

        Ok(count)
    }
}
