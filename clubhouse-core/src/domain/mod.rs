pub mod activity;
pub mod directory;
pub mod seed;
