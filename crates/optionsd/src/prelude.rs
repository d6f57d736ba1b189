pub use optionsd_core::app::App;
pub use optionsd_types::error::{ClResult, Error};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
