//! Metadata normalization.
//!
//! Raw registry records are merged into a single [`CanonicalMetadata`]
//! value, the only input the recipe renderer needs.
//!
//! - [`canonical`] - field merging (version, licenses, description, homepage)
//! - [`deps`] - translation of gem requirements into ebuild atoms

pub mod canonical;
pub mod deps;

pub use canonical::{normalize, CanonicalMetadata};
pub use deps::{
    bdepend_clause, dependency_lines, pessimistic_upper_bound, rdepend_clause,
    translate_requirement, Operator, Requirement,
};
