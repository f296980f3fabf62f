pub mod info;
pub mod sync;
pub mod validate;
