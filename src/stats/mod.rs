//! Statistics engine
//!
//! Aggregates over the whole store: word length metrics and anagram group
//! sizes. Everything here only reads.

mod groups;
mod meta;

pub use groups::{
    AnagramGroup, group_size_distribution, groups_of_size, largest_group, most_anagrams,
};
pub use meta::{MetaData, meta_data};
