//! `stylen-core` — domain model and content-resolution logic for the
//! StylenSurface marketing site CMS.
//!
//! Everything in this crate is pure: entities, slug rules, the section
//! slot registry, built-in default content, and the template dispatch
//! that turns a stored page into a fully resolved view model. Persistence
//! lives in `stylen-db`, outbound delivery in `stylen-relay`.

pub mod defaults;
pub mod error;
pub mod lead;
pub mod menu;
pub mod page;
pub mod product;
pub mod render;
pub mod route;
pub mod section;
pub mod settings;
pub mod slug;
pub mod types;
