pub mod risk_weights;

pub use risk_weights::RiskWeights;
