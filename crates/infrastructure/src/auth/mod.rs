//! OAuth helper adapters.

mod file_session_helper;

pub use file_session_helper::FileSessionHelper;
