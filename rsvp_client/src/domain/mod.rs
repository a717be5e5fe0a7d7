pub mod guests;
pub mod validation;
pub mod workflow;
