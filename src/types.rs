//! Shared type definitions
//!
//! Small strongly-typed structures used across commands, replacing tuples in
//! public APIs.

use crate::catalog::Category;

/// Category count information
/// Replaces (Category, usize) tuples for catalog statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}
