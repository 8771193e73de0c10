//! Concept extraction: turning a run of steps into a named, parameterized
//! concept and the text that invokes it.
//!
//! - [`params`]: declares parameters from the quoted literals of the new name
//! - [`body`]: renders the concept definition, promoting declared literals
//! - [`invocation`]: renders the call site with concrete argument values
//! - [`scanner`]: the quote scanner all three share

pub mod body;
pub mod invocation;
pub mod params;
pub mod scanner;

pub use body::{render_definition, render_step, STEP_PREFIX};
pub use invocation::{
    find_ambiguous_bindings, render_invocation, table_bindings, AmbiguousBinding, TableBinding,
};
pub use params::{ConceptName, HEADER_PREFIX};
