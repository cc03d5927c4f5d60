// Public API exports
pub mod chunker;
pub mod engine;
pub mod error;
pub mod executor;
pub mod mapping;
pub mod value;
pub mod writer;

// Re-export main types for convenience
pub use chunker::{Chunks, ChunkedExt, chunked};
pub use engine::Engine;
pub use error::BatchError;
pub use executor::Execute;
pub use mapping::{ColumnDef, ColumnRole, Table};
pub use value::Value;
pub use writer::{BatchWriter, DEFAULT_CHUNK_ROWS};
