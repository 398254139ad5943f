pub mod composite;
pub mod flood;
