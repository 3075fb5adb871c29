pub mod documents;
pub mod error;
pub mod roster;

pub use documents::{load_documents, read_documents};
pub use error::IngestError;
pub use roster::{load_roster, parse_roster};
