pub mod typing;
pub mod wrap;
