pub mod http;
pub mod session_code;
pub mod ws;

pub use session_code::SessionCode;
