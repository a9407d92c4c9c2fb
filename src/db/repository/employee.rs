//! Employee Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::Employee;

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert when `id` is absent, otherwise overwrite the row with the
    /// matching id. Returns the persisted employee with `id` populated.
    pub async fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        match employee.id {
            None => {
                let saved: Employee = sqlx::query_as(
                    r#"
                    INSERT INTO employees (first_name, last_name, email)
                    VALUES (?, ?, ?)
                    RETURNING id, first_name, last_name, email
                    "#,
                )
                .bind(&employee.first_name)
                .bind(&employee.last_name)
                .bind(&employee.email)
                .fetch_one(&self.pool)
                .await?;
                Ok(saved)
            }
            Some(id) => {
                let saved: Option<Employee> = sqlx::query_as(
                    r#"
                    UPDATE employees
                    SET first_name = ?, last_name = ?, email = ?
                    WHERE id = ?
                    RETURNING id, first_name, last_name, email
                    "#,
                )
                .bind(&employee.first_name)
                .bind(&employee.last_name)
                .bind(&employee.email)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
                saved.ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
            }
        }
    }

    /// Find all employees, ordered by id
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> =
            sqlx::query_as("SELECT id, first_name, last_name, email FROM employees ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        let employee: Option<Employee> =
            sqlx::query_as("SELECT id, first_name, last_name, email FROM employees WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(employee)
    }

    /// Find employee by email (uniqueness-gate lookup)
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let employee: Option<Employee> = sqlx::query_as(
            "SELECT id, first_name, last_name, email FROM employees WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    /// Find employee by exact first and last name
    pub async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> RepoResult<Option<Employee>> {
        let employee: Option<Employee> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, email FROM employees
            WHERE first_name = ? AND last_name = ?
            LIMIT 1
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    /// Remove the row if present; an absent id is not an error
    pub async fn delete_by_id(&self, id: i64) -> RepoResult<()> {
        sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Clear the table (test-setup helper)
    pub async fn delete_all(&self) -> RepoResult<()> {
        sqlx::query("DELETE FROM employees")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
