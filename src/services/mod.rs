// Service module exports

pub mod csv;
pub mod store;
pub mod validation;
