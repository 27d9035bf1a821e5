//! nibeans: bean implementation generator.
//!
//! Bean interfaces are described as JSON declaration rounds. The pipeline
//! binds them into a symbol table (`nib-binder`), infers and validates their
//! properties (`nib-checker`), and renders one Java container class with an
//! implementation per valid bean (`nib-emitter`).
//!
//! This crate holds the command line front end, the tracing setup and the
//! runtime provider registry that generated code registers into.

pub use nib_binder as binder;
pub use nib_checker as checker;
pub use nib_common as common;
pub use nib_emitter as emitter;
pub use nib_solver as solver;

pub mod cli;
pub mod registry;
pub mod tracing_config;
