//! Form payloads posted by the templates.

pub mod employee;
