//! Commit identifiers and timestamps.
//!
//! Identifiers are seven lowercase hex characters drawn independently per
//! character. Nothing checks them for uniqueness; with 16^7 possible values a
//! collision inside one teaching session is possible but ignored.

use uuid::Uuid;

pub const ID_LEN: usize = 7;

/// Timestamp of the first commit of a session, in milliseconds.
pub const BASE_TIMESTAMP: i64 = 1_640_995_200_000;

/// Spacing between consecutive commits, in milliseconds.
pub const TIMESTAMP_STRIDE: i64 = 300_000;

/// Timestamp for the commit appended after `commit_count` existing commits.
pub fn next_timestamp(commit_count: usize) -> i64 {
    BASE_TIMESTAMP + commit_count as i64 * TIMESTAMP_STRIDE
}

pub trait IdSource: Send {
    fn next_id(&mut self) -> String;
}

/// Draws identifiers from the random bits of a v4 UUID.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> String {
        // The first 48 bits of a v4 UUID are random, so every hex digit of
        // the prefix is uniform over 0-9a-f.
        let hex = Uuid::new_v4().simple().to_string();
        hex[..ID_LEN].to_string()
    }
}

/// Yields `0000001`, `0000002`, ... for reproducible transcripts.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    counter: u32,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        self.counter = self.counter.wrapping_add(1) & 0x0fff_ffff;
        format!("{:07x}", self.counter)
    }
}
