pub mod pac_engine;
pub mod report;

pub use pac_engine::JsPacEngine;
pub use report::render_report;
