mod error;
mod graph;
mod road;
mod town;

pub use error::*;
pub use graph::*;
pub use road::*;
pub use town::*;
