// src/presentation/http/controllers/mod.rs
pub mod listings;
pub mod terms;
