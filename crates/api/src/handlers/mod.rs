pub mod ai;
pub mod auth;
pub mod dashboard;
pub mod goals;
pub mod notes;
pub mod resources;
pub mod views;
