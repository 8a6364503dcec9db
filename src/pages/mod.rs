pub mod dashboard;
pub mod login;

pub use dashboard::*;
pub use login::*;
