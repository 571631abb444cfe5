//! Card stacks and the registry that owns them.
//!
//! ## Key Types
//!
//! - `StackKind`: closed set of stack variants (Cell, Foundation, Tableau)
//! - `CardStack`: ordered cards plus the variant's acceptance and run rules
//! - `StackRegistry`: index-addressed stacks for one deal
//!
//! ## Ownership
//!
//! A card lives in exactly one stack's vector. Moving cards between stacks
//! goes through [`StackRegistry::transfer`], which detaches and re-attaches
//! the run as a unit so a card can never be in two places at once.

mod pile;
mod registry;

pub use pile::{is_run_pair, CardStack, LayoutDirection, StackKind};
pub use registry::StackRegistry;
