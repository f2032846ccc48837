//! Stat formatting, projection and pagination
//!
//! Everything in here is pure: records in, display strings out.

pub mod format;
pub mod pagination;
pub mod projector;
pub mod record;
pub mod schema;

pub use format::format_stat;
pub use pagination::{ExpandToggle, Paginate, StepPager};
pub use projector::{project, DisplayTable};
pub use record::{records_from_payload, StatRecord};
pub use schema::{FieldSchema, FieldSource};
