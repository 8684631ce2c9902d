// NOTE: rolodex Architecture Rationale
//
// Why fetch-then-transform (not server-side queries)?
// - The upstream directory API is a plain fixture service with no search,
//   filter, or sort parameters to delegate to
// - Directories are small (tens of records); one wholesale fetch plus pure
//   in-memory transforms keeps every keystroke cheap and network-free
// - Trade-off: data is stale until reload, but `r` refetches on demand
//
// Why one coordinator per run (not shared mutable state)?
// - All browse state lives in a single DirectoryState owned by the active
//   command; every rendered list is derived from it on demand
// - Renderer and coordinator talk over channels, so there is no implicit
//   event bus to reason about and no listener leaks on teardown
// - Trade-off: every update re-derives the visible list, acceptable at
//   directory scale
//
// Why fail-fast detail loading (not partial render)?
// - A profile with posts missing is worse than no profile: the reader cannot
//   tell "user has no posts" from "posts failed to load"
// - Either request failing abandons the pair; the browse screen stays up and
//   shows a single notification instead

mod args;
mod commands;
pub mod config;
pub mod presentation;
mod handlers;
pub mod types;

pub use args::{Cli, Commands, UsersCommand};
pub use commands::run;
