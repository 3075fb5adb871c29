//! Tests for upload staging, file size formatting, and recipient
//! selection.

use dochub_model::{Department, DepartmentId, Employee, EmployeeId, OrgTree, SearchQuery};
use dochub_portal::{StagedFile, UploadState, format_file_size};

fn staged(name: &str, size_bytes: u64) -> StagedFile {
    StagedFile {
        name: name.to_string(),
        size_bytes,
        content_type: String::new(),
    }
}

fn sample_tree() -> OrgTree {
    let employee = |id: &str, name: &str, role: &str| Employee {
        id: EmployeeId::new(id).expect("valid employee id"),
        name: name.to_string(),
        role: role.to_string(),
    };
    OrgTree::new(vec![
        Department {
            id: DepartmentId::new("operations").expect("valid department id"),
            name: "Operations".to_string(),
            employees: vec![
                employee("operations-1", "Deepak Sharma", "Operations Manager"),
                employee("operations-2", "Lakshmi Das", "Train Controller"),
                employee("operations-3", "Ravi Krishnan", "Station Master"),
            ],
        },
        Department {
            id: DepartmentId::new("hr").expect("valid department id"),
            name: "Human Resources".to_string(),
            employees: vec![employee("hr-1", "Anitha Raj", "HR Manager")],
        },
    ])
    .expect("valid tree")
}

fn dept_id(id: &str) -> DepartmentId {
    DepartmentId::new(id).expect("valid department id")
}

// ============================================================================
// File staging and preview
// ============================================================================

#[test]
fn staged_files_accumulate_in_order() {
    let mut upload = UploadState::new(sample_tree());
    upload.stage_files([staged("report.pdf", 2048)]);
    upload.stage_files([staged("minutes.docx", 512), staged("site.png", 4096)]);

    let names: Vec<&str> = upload.staged().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["report.pdf", "minutes.docx", "site.png"]);
}

#[test]
fn preview_is_bounds_checked() {
    let mut upload = UploadState::new(sample_tree());
    upload.stage_files([staged("report.pdf", 2048)]);

    assert!(!upload.open_preview(3));
    assert!(upload.preview().is_none());

    assert!(upload.open_preview(0));
    assert_eq!(upload.preview().map(|f| f.name.as_str()), Some("report.pdf"));

    upload.close_preview();
    assert!(upload.preview().is_none());
}

#[test]
fn accept_list_checks_extension_case_insensitively() {
    assert!(staged("Report.PDF", 1).is_accepted());
    assert!(staged("scan.jpeg", 1).is_accepted());
    assert!(!staged("program.exe", 1).is_accepted());
    assert!(!staged("no-extension", 1).is_accepted());
}

#[test]
fn file_sizes_format_like_the_upload_list() {
    assert_eq!(format_file_size(0), "0 Bytes");
    assert_eq!(format_file_size(512), "512 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(2_621_440), "2.5 MB");
    assert_eq!(format_file_size(1_073_741_824), "1 GB");
}

// ============================================================================
// Recipient selection and sidebar view state
// ============================================================================

#[test]
fn recipients_resolve_in_tree_order() {
    let mut upload = UploadState::new(sample_tree());
    let hr_1 = EmployeeId::new("hr-1").expect("valid id");
    let ops_2 = EmployeeId::new("operations-2").expect("valid id");

    // Select in reverse order; resolution still follows the tree.
    upload.selection_mut().set_employee_selected(&hr_1, true);
    upload.selection_mut().set_employee_selected(&ops_2, true);

    let names: Vec<&str> = upload.recipients().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Lakshmi Das", "Anitha Raj"]);
}

#[test]
fn department_select_under_filter_reaches_hidden_members() {
    let mut upload = UploadState::new(sample_tree());

    // The filter narrows Operations to one visible employee.
    let visible = upload
        .selection()
        .filtered_tree(&SearchQuery::new("controller"));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].employees.len(), 1);

    upload
        .selection_mut()
        .set_department_selected(&dept_id("operations"), true);
    assert_eq!(upload.recipients().len(), 3);
}

#[test]
fn expansion_is_independent_of_selection() {
    let mut upload = UploadState::new(sample_tree());
    let operations = dept_id("operations");

    assert!(!upload.is_expanded(&operations));
    upload.toggle_expanded(&operations);
    assert!(upload.is_expanded(&operations));

    upload
        .selection_mut()
        .set_department_selected(&operations, true);
    upload.toggle_expanded(&operations);
    assert!(!upload.is_expanded(&operations));
    assert!(
        upload
            .selection()
            .is_department_fully_selected(&operations)
    );
}
