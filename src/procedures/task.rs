//! Tasks, performed on a context.
//!
//! ```rust
//! # use otter_refute::context::Context;
//! # use otter_refute::config::Config;
//! # use otter_refute::structures::task::Task;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let tasks = ["a +", "~a v b +", "b ?", "a -", "b ?"]
//!     .iter()
//!     .map(|s| s.parse::<Task>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let reports = tasks
//!     .into_iter()
//!     .map(|task| the_context.perform(task).unwrap().short_str())
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(reports, ["added a", "added b v ~a", "b is true", "removed a", "b is unknown"]);
//! ```

use crate::{context::Context, reports::TaskReport, structures::task::Task, types::err};

impl Context {
    /// Performs the task.
    ///
    /// Inquiries keep acquired knowledge on the [configuration](crate::config::Config::keep_acquired_knowledge).
    pub fn perform(&mut self, task: Task) -> Result<TaskReport, err::ErrorKind> {
        match task {
            Task::Inquiry(goal) => {
                let keep = self.config.keep_acquired_knowledge.value;
                let report = self.resolve(Some(goal), keep)?;
                Ok(TaskReport::Inquiry(report))
            }

            Task::PremiseAddition(clause) => {
                let mutation = self.knowledge_db.add_premise(clause.clone());
                Ok(TaskReport::PremiseAddition { clause, mutation })
            }

            Task::PremiseRemoval(clause) => {
                let mutation = self.knowledge_db.remove_premise(&clause);
                Ok(TaskReport::PremiseRemoval { clause, mutation })
            }
        }
    }
}
