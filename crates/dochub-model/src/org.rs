//! Organization hierarchy: departments and the employees they own.
//!
//! The tree has exactly two levels. A department owns an ordered list of
//! employees; an employee belongs to exactly one department. The tree is
//! validated once at construction and immutable afterwards, so identifier
//! lookups never have to re-check structural invariants.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::ids::{DepartmentId, EmployeeId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    /// Secondary searchable text shown under the name (job title).
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub employees: Vec<Employee>,
}

/// Validated two-level organization tree.
///
/// Employee ids must be unique across the whole tree, not just within their
/// department.
#[derive(Debug, Clone)]
pub struct OrgTree {
    departments: Vec<Department>,
    dept_index: BTreeMap<DepartmentId, usize>,
    owner: BTreeMap<EmployeeId, DepartmentId>,
}

impl OrgTree {
    pub fn new(departments: Vec<Department>) -> Result<Self, ModelError> {
        let mut dept_index = BTreeMap::new();
        let mut owner = BTreeMap::new();
        for (index, department) in departments.iter().enumerate() {
            if dept_index.insert(department.id.clone(), index).is_some() {
                return Err(ModelError::DuplicateDepartment(
                    department.id.as_str().to_string(),
                ));
            }
            for employee in &department.employees {
                if owner
                    .insert(employee.id.clone(), department.id.clone())
                    .is_some()
                {
                    return Err(ModelError::DuplicateEmployee(
                        employee.id.as_str().to_string(),
                    ));
                }
            }
        }
        Ok(Self {
            departments,
            dept_index,
            owner,
        })
    }

    /// Departments in their declared order.
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn department(&self, id: &DepartmentId) -> Option<&Department> {
        self.dept_index.get(id).map(|index| &self.departments[*index])
    }

    /// The department an employee belongs to, if the id is known.
    pub fn owner_of(&self, id: &EmployeeId) -> Option<&DepartmentId> {
        self.owner.get(id)
    }

    pub fn contains_employee(&self, id: &EmployeeId) -> bool {
        self.owner.contains_key(id)
    }

    pub fn contains_department(&self, id: &DepartmentId) -> bool {
        self.dept_index.contains_key(id)
    }

    pub fn employee_count(&self) -> usize {
        self.owner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }
}
