pub mod user_profile;
pub mod visit;
