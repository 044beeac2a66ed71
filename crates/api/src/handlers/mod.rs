pub mod auth;
pub mod leads;
pub mod media;
pub mod menus;
pub mod pages;
pub mod products;
pub mod seed;
pub mod settings;
pub mod site;
pub mod zoho;
