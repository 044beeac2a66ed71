//! Shared type aliases used across the workspace.

/// UTC timestamp stored on every mutable entity.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Entity identifier. All CMS collections key rows by UUID v4.
pub type EntityId = uuid::Uuid;
