// src/utils/mod.rs

pub mod filename;
pub mod html;
pub mod template;
