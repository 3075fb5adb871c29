//! Built-in demo dataset used when no roster/listing file is given.
//!
//! Mirrors the mock data the portal ships with so every command works out
//! of the box.

use dochub_model::{
    Department, DepartmentId, DocumentOrigin, DocumentRecord, Employee, EmployeeId, ModelError,
    OrgTree,
};

pub fn demo_roster() -> Result<OrgTree, ModelError> {
    let departments = [
        (
            "civil",
            "Civil Engineering",
            vec![
                ("civil-1", "Rajesh Kumar", "Senior Civil Engineer"),
                ("civil-2", "Priya Nair", "Assistant Engineer"),
                ("civil-3", "Mohammed Ali", "Site Supervisor"),
            ],
        ),
        (
            "electrical",
            "Electrical Engineering",
            vec![
                ("electrical-1", "Arun Pillai", "Chief Electrical Engineer"),
                ("electrical-2", "Kavitha Menon", "Control Systems Engineer"),
                ("electrical-3", "Suresh Babu", "Maintenance Technician"),
            ],
        ),
        (
            "operations",
            "Operations",
            vec![
                ("operations-1", "Deepak Sharma", "Operations Manager"),
                ("operations-2", "Lakshmi Das", "Train Controller"),
                ("operations-3", "Ravi Krishnan", "Station Master"),
            ],
        ),
        (
            "safety",
            "Safety & Security",
            vec![
                ("safety-1", "Vinod Kumar", "Safety Officer"),
                ("safety-2", "Meera Nair", "Security Supervisor"),
            ],
        ),
        (
            "hr",
            "Human Resources",
            vec![
                ("hr-1", "Anitha Raj", "HR Manager"),
                ("hr-2", "Sanjay Menon", "Training Coordinator"),
            ],
        ),
    ];

    let mut tree = Vec::with_capacity(departments.len());
    for (id, name, employees) in departments {
        let employees = employees
            .into_iter()
            .map(|(id, name, role)| {
                Ok(Employee {
                    id: EmployeeId::new(id)?,
                    name: name.to_string(),
                    role: role.to_string(),
                })
            })
            .collect::<Result<Vec<_>, ModelError>>()?;
        tree.push(Department {
            id: DepartmentId::new(id)?,
            name: name.to_string(),
            employees,
        });
    }
    OrgTree::new(tree)
}

pub fn demo_documents() -> Vec<DocumentRecord> {
    let records = [
        (
            "Safety Circular - Emergency Brake Protocol Update",
            "Revised emergency braking procedures for all rolling stock operations. Implementation required by March 15th, 2024.",
            "Safety",
            "2024-03-01",
            "English",
            DocumentOrigin::Received,
        ),
        (
            "വാർഷിക പരിപാലന പദ്ധതി - Rolling Stock Maintenance",
            "Annual maintenance schedule for metro trains including preventive maintenance protocols and spare parts inventory.",
            "Engineering",
            "2024-02-28",
            "Malayalam",
            DocumentOrigin::Received,
        ),
        (
            "Vendor Invoice - Platform Screen Doors",
            "Invoice and installation certificate for platform screen door upgrades at Aluva and Edappally stations.",
            "Procurement",
            "2024-02-27",
            "Bilingual",
            DocumentOrigin::Received,
        ),
        (
            "Passenger Feedback Analysis - Q4 2023",
            "Quarterly analysis of passenger complaints and suggestions with recommended action items for service improvement.",
            "Operations",
            "2024-02-25",
            "English",
            DocumentOrigin::Received,
        ),
        (
            "Monthly Operations Report - February 2024",
            "Comprehensive report on train punctuality, passenger loads, and operational efficiency metrics for February.",
            "Operations",
            "2024-03-01",
            "English",
            DocumentOrigin::Uploaded,
        ),
        (
            "Environmental Impact Assessment - Corridor Extension",
            "Approved environmental clearance documentation for the proposed metro corridor extension to Kakkanad.",
            "Planning",
            "2024-02-20",
            "English",
            DocumentOrigin::Verified,
        ),
        (
            "HR Policy Update - Remote Work Guidelines",
            "Updated remote work policy for administrative staff with new approval processes and performance metrics.",
            "HR",
            "2024-02-15",
            "English",
            DocumentOrigin::Received,
        ),
    ];

    records
        .into_iter()
        .map(
            |(title, snippet, department, date, language, origin)| DocumentRecord {
                title: title.to_string(),
                snippet: snippet.to_string(),
                department: department.to_string(),
                date: date.to_string(),
                language: language.to_string(),
                origin,
            },
        )
        .collect()
}
