//! Station finder.
//!
//! This module answers: "which station should I drive to for this fuel?"
//! It fetches nearby stations, computes distance and price for the
//! requested product, applies the store and cheapest filters, and picks
//! the nearest station left.
//!
//! Store presence is resolved in two phases: a local heuristic over the
//! search results, then, only if that finds nothing, detail lookups for
//! the nearest stations under a concurrency limit.

mod config;
mod find;
mod output;
mod resolve;
mod source;

#[cfg(test)]
mod testing;

pub use config::FinderConfig;
pub use find::{
    EnrichedStation, FindError, FindRequest, Finder, enrich, filter_cheapest, nearest_n,
    select_nearest,
};
pub use output::StationOut;
pub use resolve::{detail_has_store, resolve_store_presence};
pub use source::StationSource;
