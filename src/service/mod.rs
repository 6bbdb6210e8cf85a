pub mod form_prompt;
pub mod status_reporter;
pub mod sync_service;
