pub mod path;
pub mod aggregate;
pub mod histogram;
pub mod ranked;
pub mod format;
pub mod session;

pub use path::*;
pub use aggregate::*;
pub use histogram::*;
pub use ranked::*;
pub use format::*;
pub use session::*;

pub use disk_viewer_domain::ReportView;
