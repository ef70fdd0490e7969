//! Metro route planner.
//!
//! Answers two questions over a fixed network of stations and lines:
//! which route needs the fewest transfers, and which route is fastest.
//! Both routes come with the fare for travelling them.

pub mod domain;
pub mod lines;
pub mod network;
pub mod planner;
