pub mod chart;
pub mod filter;
pub mod list;
pub mod settings;
pub mod snapshot;
pub mod transaction;
pub mod user;
pub mod wallet;
