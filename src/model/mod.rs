pub mod competition;
pub mod fixture;
pub mod ingestion;
pub mod provider;
pub mod response;
pub mod rights;
pub mod schema;
pub mod season;
pub mod sport;
pub mod team;
pub mod territory;
pub mod user;
pub mod venue;

pub(crate) fn default_true() -> bool {
    true
}
