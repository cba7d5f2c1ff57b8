//! Per-property audit settings as read from entity declarations.

mod property_auditing_data;
pub use property_auditing_data::{AccessType, PropertyAuditingData, RelationTargetAuditMode};
