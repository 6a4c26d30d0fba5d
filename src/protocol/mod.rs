//! # Protocol Rules
//!
//! Message-construction rules sitting between the codec and the services:
//! how a request is formed and how its acknowledgment is derived.

pub mod exchange;
