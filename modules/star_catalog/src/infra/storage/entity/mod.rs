pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
