/*!
Text forms of literals, clauses, and tasks.

- A literal is a variable, prefixed with [NEGATION](crate::structures::literal::NEGATION) if negated.
- A clause is a whitespace separated sequence of literals, with tokens equal to [DISJUNCTION](crate::structures::clause::DISJUNCTION) (ignoring case) skipped.
  So, `a v ~b`, `a ~b`, and `a V ~b` are each the same clause, while the empty string is the empty clause.
- A task is a clause followed by a [task operator](crate::structures::task).
  Trailing whitespace is ignored, and the final character of the task is taken to be the operator.

```rust
# use otter_refute::structures::{clause::Clause, task::Task};
# use otter_refute::types::err::ParseError;
let clause = "a v ~b".parse::<Clause>().unwrap();
assert_eq!(clause, "~B a".parse::<Clause>().unwrap());

let task = "a v ~b ?".parse::<Task>().unwrap();
assert_eq!(task, Task::Inquiry(clause));

assert_eq!("a v ~b".parse::<Task>(), Err(ParseError::UnknownOperator('b')));
assert_eq!("a v ~".parse::<Clause>(), Err(ParseError::Negation));
```
*/

use std::str::FromStr;

use crate::{
    structures::{
        clause::{Clause, DISJUNCTION},
        literal::{Literal, NEGATION},
        task::{Task, INQUIRY, PREMISE_ADDITION, PREMISE_REMOVAL},
    },
    types::err::{self},
};

impl FromStr for Literal {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (variable, negated) = match s.strip_prefix(NEGATION) {
            Some(variable) => (variable, true),
            None => (s, false),
        };

        match variable.chars().next() {
            None if negated => Err(err::ParseError::Negation),
            None => Err(err::ParseError::Empty),
            Some(NEGATION) => Err(err::ParseError::Negation),
            Some(_) => Ok(Literal::new(variable, negated)),
        }
    }
}

impl FromStr for Clause {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .filter(|token| !token.eq_ignore_ascii_case(DISJUNCTION))
            .map(Literal::from_str)
            .collect()
    }
}

impl FromStr for Task {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_end();

        let Some(operator) = s.chars().next_back() else {
            return Err(err::ParseError::Empty);
        };

        let task: fn(Clause) -> Task = match operator {
            INQUIRY => Task::Inquiry,
            PREMISE_ADDITION => Task::PremiseAddition,
            PREMISE_REMOVAL => Task::PremiseRemoval,
            _unknown_operator => return Err(err::ParseError::UnknownOperator(operator)),
        };

        let clause = s[..s.len() - operator.len_utf8()].parse::<Clause>()?;
        Ok(task(clause))
    }
}
