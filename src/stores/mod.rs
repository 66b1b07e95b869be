mod profile_store;
mod visit_store;

#[cfg(test)]
pub mod memory;

pub use profile_store::{MongoProfileStore, ProfileStore};
pub use visit_store::{MySqlVisitStore, VisitStore};

#[cfg(test)]
pub use profile_store::MockProfileStore;
#[cfg(test)]
pub use visit_store::MockVisitStore;
