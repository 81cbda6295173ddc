mod errors;
mod home;
mod layout;
mod run_detail;
mod runs;

pub use errors::{error_page, not_found};
pub use home::home;
pub use layout::{layout, APP_TITLE};
pub use run_detail::run_page;
pub use runs::runs_page;
