//! BDD step definition modules

pub mod probe_steps;
pub mod retry_steps;
