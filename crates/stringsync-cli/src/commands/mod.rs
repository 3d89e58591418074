pub mod delete;
pub mod locales;
pub mod repos;
pub mod sync;
