pub mod interface;
pub mod ip;
