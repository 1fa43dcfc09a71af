pub mod autodetect;
pub mod discovery;
pub mod selection;
