//! Employee Service
//!
//! Business-rule gate in front of the employee repository: email
//! uniqueness on create, field presence checks, plain delegation for
//! the rest.

use crate::db::models::{Employee, EmployeeCreate};
use crate::db::repository::{EmployeeRepository, RepoError, RepoResult};

#[derive(Clone)]
pub struct EmployeeService {
    repo: EmployeeRepository,
}

impl EmployeeService {
    pub fn new(repo: EmployeeRepository) -> Self {
        Self { repo }
    }

    /// Create a new employee.
    ///
    /// The email pre-check is an early exit; the UNIQUE index on
    /// `employees.email` is the authoritative guard, so a concurrent
    /// insert that slips past the check still surfaces as `Duplicate`.
    pub async fn save_employee(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        validate_fields(&data.first_name, &data.last_name, &data.email)?;

        if self.repo.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Employee with email '{}' already exists",
                data.email
            )));
        }

        self.repo.save(&data.into_employee()).await
    }

    /// All employees; empty when none exist
    pub async fn get_all_employees(&self) -> RepoResult<Vec<Employee>> {
        self.repo.find_all().await
    }

    /// Absence is a valid result, not an error
    pub async fn get_employee_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        self.repo.find_by_id(id).await
    }

    /// Full overwrite of the mutable fields for an existing row.
    /// The email pre-check is not re-run here; the index still backstops it.
    pub async fn update_employee(&self, employee: Employee) -> RepoResult<Employee> {
        validate_fields(&employee.first_name, &employee.last_name, &employee.email)?;
        self.repo.save(&employee).await
    }

    /// Idempotent: deleting an absent id is not an error
    pub async fn delete_employee(&self, id: i64) -> RepoResult<()> {
        self.repo.delete_by_id(id).await
    }
}

fn validate_fields(first_name: &str, last_name: &str, email: &str) -> RepoResult<()> {
    for (field, value) in [
        ("firstName", first_name),
        ("lastName", last_name),
        ("email", email),
    ] {
        if value.trim().is_empty() {
            return Err(RepoError::Validation(format!("{field} must not be empty")));
        }
    }
    Ok(())
}
