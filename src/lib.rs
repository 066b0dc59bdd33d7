//! Game Catalog - server-rendered video game catalog
//!
//! This crate serves HTML pages for:
//! - Browsing featured games and the full catalog
//! - Creating, editing and deleting games and publishers
//! - Browsing the seeded genres and the games filed under them

pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod error;
pub mod extract;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;
