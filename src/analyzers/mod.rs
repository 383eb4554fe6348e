//! Grade aggregation and student ranking.
//!
//! This module turns scanned grade files into report facts: it validates and
//! parses each file, averages grades per subject, and picks out the students
//! with the highest and lowest personal averages.

pub mod aggregate;
pub mod analyzer;
pub mod ranking;
pub mod types;
pub mod utility;
