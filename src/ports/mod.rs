pub mod engine;

pub use engine::PacEnginePort;
