pub mod breaks;
pub mod data;
pub mod session;
pub mod settings;
pub mod stats;
pub mod timer;
