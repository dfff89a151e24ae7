// Domain layer - pure engine logic, no I/O

pub mod errors;
pub mod model;
pub mod parser;
pub mod rules;
