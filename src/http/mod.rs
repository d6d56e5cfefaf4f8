//! HTTP protocol layer module
//!
//! Response builders shared by all route handlers, decoupled from the
//! worker bee's business logic.

pub mod response;

// Re-export commonly used types
pub use response::{
    build_404_response, build_501_response, build_html_response, build_json_response,
    build_text_response, ResponseOptions,
};
