//! Row models: the stored (wire) representation of each collection and
//! its translation to and from `stylen-core` entities.

pub mod lead;
pub mod media;
pub mod menu;
pub mod page;
pub mod product;
pub mod settings;
