mod synergy_app;

pub use synergy_app::{SynergyApp, SynergyOperation};
