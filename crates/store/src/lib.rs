//! File-backed profile persistence: settings plus the cumulative coin
//! wallet, the one piece of state that outlives a match.

mod profile_file;

pub use profile_file::*;
