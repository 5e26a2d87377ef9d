/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod memory;
