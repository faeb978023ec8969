pub mod extract;
pub mod translate;
pub mod upload;
