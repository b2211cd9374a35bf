pub mod profile;
pub mod question;
pub mod reconcile;
pub mod score;
