pub mod catalog;
pub mod competition;
pub mod database;
pub mod fixture;
pub mod ingestion;
pub mod rights;
pub mod team;
pub mod territory;
pub mod user;
