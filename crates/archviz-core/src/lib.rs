//! Archviz Core Types and Definitions
//!
//! This crate provides the foundational types for the Smart Coach
//! architecture diagram generator. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Semantic**: The semantic diagram model ([`semantic`] module)

pub mod color;
pub mod identifier;
pub mod semantic;
