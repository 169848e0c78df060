//! DTOs bridging the service layer with templates and session state.

pub mod employee;
