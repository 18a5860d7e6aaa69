pub mod contact;
pub mod public;
