pub mod heroes;
