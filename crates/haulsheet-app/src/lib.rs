//! Application service layer - state, session, report rendering, export

pub mod config;
pub mod export;
pub mod report;
pub mod repository;
pub mod session;
pub mod state;
