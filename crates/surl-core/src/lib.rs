pub mod logging;
pub mod script_url;

pub use script_url::ScriptUrl;
