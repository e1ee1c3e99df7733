//! A library for establishing whether a clause follows from some premises, by refutation resolution.
//!
//! otter_refute is a library for propositional resolution: a goal is established by deriving the empty clause from the premises together with the negation of the goal.
//! Premises may be added and removed between inquiries, and on success the derivation of the empty clause is returned as a proof.
//!
//! # Orientation
//!
//! The library is design around the core structure of a [context].
//!
//! Contexts are built with a configuration, and premises may be added through the [text form](crate::builder) of a clause or [programatically](crate::db::knowledge::KnowledgeDB::add_premise).
//!
//! Internally, and at a high-level, a resolution is viewed in terms of manipulation of a [knowledge database](crate::db::knowledge).
//! Notably:
//! - The premises and goal are stored in the knowledge database.
//! - Pairs of clauses to resolve are given by a [control strategy](crate::config::ControlStrategy) over the working set of the database.
//! - Resolvents are added to the working set, which is then [simplified](crate::simplification), until either the empty clause is resolved or nothing new is found.
//!
//! Useful starting points, then, may be:
//! - The high-level [resolve procedure](crate::procedures::resolve) to inspect the dynamics of a resolution.
//! - The [database module](crate::db) to inspect the data considered during a resolution.
//! - The [structures] to familiarise yourself with the abstract elements of a resolution and their representation (literals, clauses, etc.)
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Establish a goal, and inspect the proof.
//!
//! ```rust
//! # use otter_refute::config::Config;
//! # use otter_refute::context::Context;
//! # use otter_refute::structures::clause::Clause;
//! let mut the_context = Context::from_config(Config::default());
//!
//! for premise in ["a", "b v ~a", "c v ~b"] {
//!     the_context.knowledge_db.add_premise(premise.parse().unwrap());
//! }
//!
//! let report = the_context.resolve(Some("c".parse().unwrap()), false).unwrap();
//! assert!(report.goal_is_true());
//!
//! let proof = report.proof().unwrap();
//! let last_step = proof.steps.last().unwrap();
//! assert!(last_step.resolvent.clause().is_nil());
//! assert_eq!(report.to_string().lines().last(), Some("c is true"));
//! ```
//!
//! + Perform a sequence of tasks.
//!
//! ```rust
//! # use otter_refute::config::Config;
//! # use otter_refute::context::Context;
//! # use otter_refute::builder::read_tasks;
//! # use std::io::Write;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let mut tasks = vec![];
//! let _ = tasks.write(b"
//! pasta +
//! sauce v ~pasta +
//! sauce ?
//! pasta -
//! sauce ?
//! ");
//!
//! let reports = read_tasks(tasks.as_slice())
//!     .unwrap()
//!     .into_iter()
//!     .map(|task| the_context.perform(task).unwrap().short_str())
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(reports[2], "sauce is true");
//! assert_eq!(reports[3], "removed pasta");
//! assert_eq!(reports[4], "sauce is unknown");
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are lists in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the knowledge database](crate::db::knowledge) can be filtered with `RUST_LOG=knowledge …` or,
//! - A summary of each resolution without information about the resolvents can be found with `RUST_LOG=resolution=info …`
//!

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::derivable_impls)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod reports;

pub mod db;

pub mod misc;

pub mod simplification;
