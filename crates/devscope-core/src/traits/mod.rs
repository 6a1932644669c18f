pub mod baseline_provider;

pub use baseline_provider::BaselineProvider;
