pub mod role;
pub mod validate;
