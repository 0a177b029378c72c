// Modules under core, split into files for convenience
mod column;
mod index;
mod run;

// Re-exports of the key public data structures
pub use column::{Column, ColumnKind};
pub use index::{ColumnRef, DatIndex};
pub use run::Run;
