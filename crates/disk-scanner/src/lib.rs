pub mod scanner;
pub mod validate;

pub use scanner::*;
pub use validate::*;

pub use disk_viewer_domain::AnalysisResult;
