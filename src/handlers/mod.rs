// src/handlers/mod.rs

pub mod article;
