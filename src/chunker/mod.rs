mod chunks;

#[cfg(test)]
mod tests;

pub use chunks::{ChunkedExt, Chunks, chunked};
