//! Solution encodings for number partitioning.
//!
//! An [`Encoding`] bundles the three capabilities the local-search driver
//! needs: drawing a random solution, drawing a neighbor of a solution, and
//! evaluating a solution's residue.
//!
//! - [`SignEncoding`]: each number is assigned `+1` or `-1`. The residue is
//!   the absolute signed sum.
//! - [`PrepartitionEncoding`]: each number is assigned one of `n` group
//!   labels. Numbers sharing a label are summed, and the grouped array is
//!   reduced by Karmarkar-Karp.
//!
//! # References
//!
//! - Ruml, Ngo, Marks & Shieber (1996), "Easily Searched Encodings for
//!   Number Partitioning", *JOTA* 89(2), 251-291.

mod prepartition;
mod standard;
mod types;

pub use prepartition::{
    group_by_labels, prepartition_residue, random_label_vector, LabelVector,
    PrepartitionEncoding,
};
pub use standard::{random_sign_vector, standard_residue, SignEncoding, SignVector};
pub use types::Encoding;
