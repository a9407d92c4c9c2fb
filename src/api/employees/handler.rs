//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::common::{AppError, AppResult};
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::db::repository::EmployeeRepository;
use crate::service::EmployeeService;
use crate::state::AppState;

/// List all employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let service = EmployeeService::new(EmployeeRepository::new(state.pool.clone()));
    let employees = service.get_all_employees().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let service = EmployeeService::new(EmployeeRepository::new(state.pool.clone()));
    let employee = service
        .get_employee_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {id} not found")))?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let service = EmployeeService::new(EmployeeRepository::new(state.pool.clone()));
    let employee = service.save_employee(payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update an employee (full overwrite of the mutable fields, id kept)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let service = EmployeeService::new(EmployeeRepository::new(state.pool.clone()));

    let mut employee = service
        .get_employee_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {id} not found")))?;

    employee.first_name = payload.first_name;
    employee.last_name = payload.last_name;
    employee.email = payload.email;

    let updated = service.update_employee(employee).await?;
    Ok(Json(updated))
}

/// Delete an employee; a never-existing id is still a success
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let service = EmployeeService::new(EmployeeRepository::new(state.pool.clone()));
    service.delete_employee(id).await?;
    Ok(Json(serde_json::json!({
        "message": "Employee deleted successfully"
    })))
}
