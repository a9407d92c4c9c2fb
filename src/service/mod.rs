//! Service layer
//!
//! Business rules in front of the repositories.

pub mod employee;

pub use employee::EmployeeService;
