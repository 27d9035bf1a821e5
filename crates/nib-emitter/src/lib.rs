//! Emitter for the nibeans bean generator.
//!
//! Renders a `BeanModelSet` into one Java container class holding a nested
//! `<Name>_impl` class per bean and a `ProviderService` that registers them,
//! plus the service manifest line that makes the container discoverable.

pub mod emitter;
pub mod output;
mod source_writer;

pub use emitter::{Emitter, TargetClass};
pub use output::{EmitError, EmitOutput, PROVIDER_SERVICE_CLASS, SERVICE_MANIFEST_PATH};
