//! urbanpulse-cli
//! ==============
//!
//! Terminal front end for the `urbanpulse-core` world-cities explorer.
//!
//! The binary (`urbanpulse`) renders the same panels as the web dashboard:
//! headline metrics, the top cities, per-country totals, the city arena and
//! the map camera. Argument parsing and text rendering live in this library
//! target so they can be tested without spawning the binary.
//!
//! Quick start
//! -----------
//!
//! ```text
//! urbanpulse stats
//! urbanpulse --country Japan,India top 10
//! urbanpulse --project-year 2040 arena Tokyo Delhi
//! urbanpulse --input cities.csv.gz --snapshot cities.bin totals --json
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod render;
