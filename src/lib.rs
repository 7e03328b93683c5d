//! K2List - Clash classical rule list generator for the v2fly
//! domain-list-community dataset.
//!
//! This crate builds a deduplicated, block-grouped `.list` file from the
//! community-maintained domain categorization data, starting at the
//! `category-porn` root file.
//!
//! # Pipeline
//!
//! The whole system is one linear pipeline:
//!
//! 1. **Source** ([`source`]): read raw category text by name, from a local
//!    checkout or the GitHub raw URL, chosen once at startup.
//! 2. **Resolve** ([`resolver`]): breadth-first traversal of `include:`
//!    directives, each file read at most once.
//! 3. **Transform** ([`transform`]): map each data line to a Clash
//!    classical rule (`DOMAIN`, `DOMAIN-SUFFIX`, `DOMAIN-KEYWORD`) or drop
//!    it.
//! 4. **Generate** ([`generator`]): group rules by include block, dedup
//!    globally, and write one output file.
//!
//! # Quick Start
//!
//! ```ignore
//! use k2list::{detect_source, ListGenerator, OUTPUT_PATH};
//! use std::path::Path;
//!
//! let generator = ListGenerator::new(detect_source());
//! let list = generator.generate();
//! list.write_to(Path::new(OUTPUT_PATH))?;
//! println!("wrote {} lines", list.line_count());
//! ```
//!
//! # Failure Model
//!
//! Failures never abort the pipeline: an unreachable category file becomes
//! empty content (logged as a warning), and a write failure is logged
//! without changing the exit status. The run always produces its
//! best-effort output.

mod error;

pub mod generator;
pub mod resolver;
pub mod source;
pub mod transform;

// Re-export core types
pub use error::{Error, Result};

// Re-export the pipeline surface
pub use generator::{GeneratedList, ListGenerator, OUTPUT_PATH};
pub use resolver::{include_order, resolve, FileMap, ROOT_CATEGORY};
pub use source::{
    detect_source, CategorySource, LocalSource, RemoteSource, BASE_RAW_URL, LOCAL_DATA_DIR,
};
pub use transform::{transform, RuleKind, EXCLUDED_KEYWORD};
