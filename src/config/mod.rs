//! Configuration — where the password file and dictionary live.

pub mod settings;

pub use settings::Settings;
