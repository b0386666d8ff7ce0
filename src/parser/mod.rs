pub mod dates;
pub mod extract;
pub mod text;
pub mod version;

pub use dates::normalize_date;
pub use extract::{extract_records, summarize, summarize_pairs};
pub use version::Version;
