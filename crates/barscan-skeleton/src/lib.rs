//! Iterative morphological thinning over a caller-owned workspace arena.
//!
//! The kernel reduces a binary blob to a 1-pixel-wide skeleton by
//! repeatedly peeling its outer layer and accumulating the removed rings.
//! Everything runs inside one pre-sized arena so a per-frame caller incurs
//! no allocation on the hot path.

mod thin;
mod workspace;

pub use thin::skeletonize;
pub use workspace::SkeletonWorkspace;
