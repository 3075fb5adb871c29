//! Command implementations.

use std::str::FromStr;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use tracing::{info, warn};

use dochub_core::{SelectionEngine, SelectionStatus};
use dochub_ingest::{load_documents, load_roster};
use dochub_model::{DocumentId, EmployeeId, OrgTree, SearchQuery};
use dochub_portal::{DashboardState, DashboardTab, UploadState};

use crate::cli::{DocumentsArgs, RosterArgs, ShareArgs};
use crate::demo::{demo_documents, demo_roster};
use crate::table::{
    apply_table_style, department_cell, dim_cell, header_cell, member_cell, starred_cell,
    status_label,
};

fn resolve_roster(path: Option<&std::path::Path>) -> Result<OrgTree> {
    match path {
        Some(path) => load_roster(path).with_context(|| format!("load roster {}", path.display())),
        None => demo_roster().context("build demo roster"),
    }
}

pub fn run_roster(args: &RosterArgs) -> Result<()> {
    let tree = resolve_roster(args.roster.as_deref())?;
    let mut engine = SelectionEngine::new(tree);

    for raw in &args.select {
        let id = EmployeeId::new(raw.as_str())?;
        if !engine.set_employee_selected(&id, true) {
            warn!(employee = %id, "--select ignored: id not in roster");
        }
    }

    let query = SearchQuery::new(args.search.as_deref().unwrap_or(""));
    let view = engine.filtered_tree(&query);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Member"),
        header_cell("Role"),
        header_cell("Selected"),
    ]);
    apply_table_style(&mut table);

    for dept in &view {
        let id = &dept.department.id;
        let status = status_label(
            engine.is_department_fully_selected(id),
            engine.is_department_partially_selected(id),
        );
        table.add_row(vec![
            department_cell(&dept.department.name),
            dim_cell("-"),
            Cell::new(status),
        ]);
        for employee in &dept.employees {
            let status = status_label(engine.is_selected(&employee.id), false);
            table.add_row(vec![
                member_cell(&employee.name),
                Cell::new(employee.role.clone()),
                Cell::new(status),
            ]);
        }
    }
    println!("{table}");
    println!(
        "{} departments shown, {} selected",
        view.len(),
        engine.selected_count()
    );
    Ok(())
}

pub fn run_documents(args: &DocumentsArgs) -> Result<()> {
    let records = match args.documents.as_deref() {
        Some(path) => {
            load_documents(path).with_context(|| format!("load listing {}", path.display()))?
        }
        None => demo_documents(),
    };
    info!(records = records.len(), "listing loaded");
    let mut dashboard = DashboardState::new(records);

    for raw in &args.star {
        let id = DocumentId::from_str(raw)?;
        if dashboard.document(&id).is_none() {
            warn!(document = %id, "--star ignored: id not in listing");
            continue;
        }
        if !dashboard.is_starred(&id) {
            dashboard.toggle_starred(&id);
        }
    }

    let tab = DashboardTab::from(args.tab);
    let query = SearchQuery::new(args.search.as_deref().unwrap_or(""));
    let listing = dashboard.documents_for_tab(tab, &query);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Title"),
        header_cell("Department"),
        header_cell("Date"),
        header_cell("Language"),
        header_cell("Origin"),
        header_cell("Starred"),
    ]);
    apply_table_style(&mut table);

    for doc in &listing {
        table.add_row(vec![
            dim_cell(short_id(&doc.id)),
            Cell::new(doc.record.title.clone()),
            Cell::new(doc.record.department.clone()),
            Cell::new(doc.record.date.clone()),
            Cell::new(doc.record.language.clone()),
            Cell::new(doc.record.origin.to_string()),
            starred_cell(dashboard.is_starred(&doc.id)),
        ]);
    }
    println!("{table}");
    println!("{} ({})", tab, listing.len());
    Ok(())
}

pub fn run_share(args: &ShareArgs) -> Result<()> {
    let tree = resolve_roster(args.roster.as_deref())?;
    let mut upload = UploadState::new(tree);

    for raw in &args.departments {
        let id = dochub_model::DepartmentId::new(raw.as_str())?;
        if !upload.selection_mut().set_department_selected(&id, true) {
            warn!(department = %id, "--department ignored: id not in roster");
        }
    }
    for raw in &args.employees {
        let id = EmployeeId::new(raw.as_str())?;
        if !upload.selection_mut().set_employee_selected(&id, true) {
            warn!(employee = %id, "--employee ignored: id not in roster");
        }
    }

    let recipients = upload.recipients();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Department"),
        header_cell("Recipient"),
        header_cell("Role"),
    ]);
    apply_table_style(&mut table);

    for employee in &recipients {
        let department = upload
            .selection()
            .tree()
            .owner_of(&employee.id)
            .and_then(|id| upload.selection().tree().department(id))
            .map(|dept| dept.name.clone())
            .unwrap_or_default();
        let fully = upload
            .selection()
            .tree()
            .owner_of(&employee.id)
            .map(|id| upload.selection().department_status(id) == SelectionStatus::Full)
            .unwrap_or(false);
        let dept_cell = if fully {
            department_cell(&department)
        } else {
            Cell::new(department)
        };
        table.add_row(vec![
            dept_cell,
            Cell::new(employee.name.clone()),
            Cell::new(employee.role.clone()),
        ]);
    }
    println!("{table}");
    println!("Sharing with {} recipients", recipients.len());
    Ok(())
}

fn short_id(id: &DocumentId) -> String {
    let hex = id.to_hex();
    hex[..8].to_string()
}
