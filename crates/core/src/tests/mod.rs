//! Reusable test harnesses

pub mod store;
