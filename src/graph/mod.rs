// src/graph/mod.rs
//! Grammar-free import graph: extraction, resolution and aggregation.

pub mod aliases;
pub mod anomaly;
pub mod builder;
pub mod dirgraph;
pub mod imports;
pub mod ordered;
pub mod paths;
pub mod resolver;
pub mod tree;
pub mod tsconfig;
pub mod types;

pub use aliases::{Alias, AliasMap};
pub use anomaly::{find_suspicious, SuspiciousDir};
pub use builder::scan;
pub use dirgraph::{DirectoryGraph, MutualDependency};
pub use resolver::{Resolution, Resolver, TargetKind};
pub use tree::DirectoryTree;
pub use types::{DependencyRecord, ImportPair, ScanResult, WalkIssue};
