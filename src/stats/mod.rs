mod models;

pub use models::SessionStats;
