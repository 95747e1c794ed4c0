/// Utility for creating mock IO implementations.
#[cfg(test)]
pub mod mock;

/// Buffered stream combining reading and writing over one owned stream.
pub mod stream;
