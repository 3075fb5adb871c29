//! Tri-state selection over the organization tree.
//!
//! Selection membership is the only stored state; department status is
//! derived from it on every query. Storing a department-level flag next to
//! the member set would need a synchronization invariant between the two,
//! so no such flag exists.
//!
//! Unknown identifiers are a documented no-op: mutations report `false`
//! and log at debug level. Identifier validity is enforced where data
//! enters the system (`OrgTree` construction), not per operation.

use std::collections::BTreeSet;

use tracing::debug;

use dochub_model::{Department, DepartmentId, Employee, EmployeeId, OrgTree, SearchQuery};

/// Derived selection status of a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStatus {
    None,
    /// At least one but not all owned employees selected.
    Partial,
    /// Every owned employee selected (vacuously true for zero employees).
    Full,
}

/// One department and its employees surviving a search filter.
#[derive(Debug)]
pub struct DepartmentView<'a> {
    pub department: &'a Department,
    /// Employees matching the filter. May be empty when only the
    /// department name matched.
    pub employees: Vec<&'a Employee>,
}

/// Owns the selected-employee set over an immutable organization tree.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    tree: OrgTree,
    selected: BTreeSet<EmployeeId>,
}

impl SelectionEngine {
    pub fn new(tree: OrgTree) -> Self {
        Self {
            tree,
            selected: BTreeSet::new(),
        }
    }

    pub fn tree(&self) -> &OrgTree {
        &self.tree
    }

    /// Select or deselect a single employee. Idempotent.
    ///
    /// Returns whether the id was known; unknown ids leave the selection
    /// untouched.
    pub fn set_employee_selected(&mut self, id: &EmployeeId, selected: bool) -> bool {
        if !self.tree.contains_employee(id) {
            debug!(employee = %id, "ignoring selection change for unknown employee");
            return false;
        }
        if selected {
            self.selected.insert(id.clone());
        } else {
            self.selected.remove(id);
        }
        true
    }

    /// Select or deselect every employee a department owns.
    ///
    /// Always applies to the full unfiltered membership: toggling a
    /// department checkbox while a search narrows the visible employees
    /// must not skip the hidden ones.
    pub fn set_department_selected(&mut self, id: &DepartmentId, selected: bool) -> bool {
        let Some(department) = self.tree.department(id) else {
            debug!(department = %id, "ignoring selection change for unknown department");
            return false;
        };
        for employee in &department.employees {
            if selected {
                self.selected.insert(employee.id.clone());
            } else {
                self.selected.remove(&employee.id);
            }
        }
        true
    }

    pub fn is_selected(&self, id: &EmployeeId) -> bool {
        self.selected.contains(id)
    }

    /// True iff every employee the department owns is selected.
    ///
    /// A department with zero employees counts as fully selected so the
    /// predicate stays total.
    pub fn is_department_fully_selected(&self, id: &DepartmentId) -> bool {
        match self.tree.department(id) {
            Some(department) => department
                .employees
                .iter()
                .all(|employee| self.selected.contains(&employee.id)),
            None => false,
        }
    }

    /// True iff at least one but not all owned employees are selected.
    /// Mutually exclusive with [`is_department_fully_selected`] by
    /// construction.
    ///
    /// [`is_department_fully_selected`]: Self::is_department_fully_selected
    pub fn is_department_partially_selected(&self, id: &DepartmentId) -> bool {
        match self.tree.department(id) {
            Some(department) => {
                let selected_count = department
                    .employees
                    .iter()
                    .filter(|employee| self.selected.contains(&employee.id))
                    .count();
                selected_count > 0 && selected_count < department.employees.len()
            }
            None => false,
        }
    }

    pub fn department_status(&self, id: &DepartmentId) -> SelectionStatus {
        if self.is_department_fully_selected(id) {
            SelectionStatus::Full
        } else if self.is_department_partially_selected(id) {
            SelectionStatus::Partial
        } else {
            SelectionStatus::None
        }
    }

    /// Filter the tree by a search query.
    ///
    /// A department is included if its name matches or it retains at least
    /// one matching employee; employees match on name or role. Recomputed
    /// per call and never cached, and never touches the selection set.
    pub fn filtered_tree(&self, query: &SearchQuery) -> Vec<DepartmentView<'_>> {
        self.tree
            .departments()
            .iter()
            .filter_map(|department| {
                let employees: Vec<&Employee> = department
                    .employees
                    .iter()
                    .filter(|employee| {
                        query.matches_any([employee.name.as_str(), employee.role.as_str()])
                    })
                    .collect();
                if query.matches(&department.name) || !employees.is_empty() {
                    Some(DepartmentView {
                        department,
                        employees,
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    /// Currently selected employee ids, in id order.
    pub fn selected(&self) -> impl Iterator<Item = &EmployeeId> {
        self.selected.iter()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
