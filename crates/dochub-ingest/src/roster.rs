//! Organization roster loading.
//!
//! The roster is a TOML file of departments and their employees:
//!
//! ```toml
//! [[department]]
//! id = "safety"
//! name = "Safety & Security"
//!
//! [[department.employee]]
//! id = "safety-1"
//! name = "Vinod Kumar"
//! role = "Safety Officer"
//! ```
//!
//! Identifier validation (blank ids, duplicates anywhere in the tree)
//! happens in the model constructors, so a loaded roster is already safe
//! to hand to a selection engine.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use dochub_model::{Department, DepartmentId, Employee, EmployeeId, OrgTree};

use crate::error::IngestError;

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default, rename = "department")]
    departments: Vec<DepartmentEntry>,
}

#[derive(Debug, Deserialize)]
struct DepartmentEntry {
    id: String,
    name: String,
    #[serde(default, rename = "employee")]
    employees: Vec<EmployeeEntry>,
}

#[derive(Debug, Deserialize)]
struct EmployeeEntry {
    id: String,
    name: String,
    #[serde(default)]
    role: String,
}

/// Load an organization roster from a TOML file.
pub fn load_roster(path: &Path) -> Result<OrgTree, IngestError> {
    let text = std::fs::read_to_string(path).map_err(|error| IngestError::io(path, error))?;
    let tree = parse_roster(&text)?;
    debug!(
        path = %path.display(),
        departments = tree.departments().len(),
        employees = tree.employee_count(),
        "loaded roster"
    );
    Ok(tree)
}

/// Parse a roster from TOML text.
pub fn parse_roster(text: &str) -> Result<OrgTree, IngestError> {
    let file: RosterFile = toml::from_str(text)?;
    let mut departments = Vec::with_capacity(file.departments.len());
    for entry in file.departments {
        let employees = entry
            .employees
            .into_iter()
            .map(|employee| {
                Ok(Employee {
                    id: EmployeeId::new(employee.id)?,
                    name: employee.name,
                    role: employee.role,
                })
            })
            .collect::<Result<Vec<_>, IngestError>>()?;
        departments.push(Department {
            id: DepartmentId::new(entry.id)?,
            name: entry.name,
            employees,
        });
    }
    Ok(OrgTree::new(departments)?)
}
