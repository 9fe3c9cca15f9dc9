//! Repository fetching into the local tree
//!
//! - [`reference`]: classify the input and derive host, path segments and clone URL
//! - [`navigate`]: walk/create the directory chain, case-insensitively
//! - [`git`]: run the external clone
//! - [`workflow`]: tie the stages together

pub mod git;
pub mod navigate;
pub mod reference;
pub mod workflow;

pub use git::{CloneInvoker, GitCli};
pub use reference::{PathSegments, RepoReference, TransportKind};
pub use workflow::{clone_into_tree, CloneRequest, Outcome};
