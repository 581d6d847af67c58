pub mod activities;
pub mod system;
