pub mod mongodb;
pub mod mysql;
pub mod schema;
