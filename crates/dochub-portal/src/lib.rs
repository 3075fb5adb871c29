//! Portal session and per-view state for a DocHub UI shell.
//!
//! The architecture separates concerns into:
//!
//! - **Session**: login gate and signed-in user
//! - **View**: current screen (navigation replaces the whole variant)
//! - **DashboardState**: document store, tab listings, stars and visit marks
//! - **UploadState**: staged files plus recipient selection
//!
//! Engines from `dochub-core` are owned by the view-state structs and
//! injected with their datasets at construction; the UI shell queries them
//! on every render and mutates only through their operations.

pub mod dashboard;
pub mod navigation;
pub mod session;
pub mod upload;

pub use dashboard::{DashboardState, DocumentView};
pub use navigation::{DashboardTab, View};
pub use session::{Credentials, CredentialIssue, MIN_PASSWORD_LEN, Session, validate_credentials};
pub use upload::{ACCEPTED_EXTENSIONS, StagedFile, UploadState, format_file_size};
