pub mod profile;
pub mod projects;
