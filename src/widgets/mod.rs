pub mod mount;
pub mod node;
pub mod verification;
