mod dir_checks;
mod expansion;

pub use dir_checks::{check_readable_dir_path, check_writable_dir};
pub use expansion::expand_tilde;
