//! Match execution: structural equivalence and case dispatch.

pub mod cases;
pub mod equivalence;
