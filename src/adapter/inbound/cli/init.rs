//! Handler for the `init` command.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::application::guest::GuestService;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::store::GuestStore;

/// Create the guest table on the primary or fallback endpoint.
pub fn execute<S: GuestStore>(service: &GuestService<S>, config: &Config) -> Result<()> {
    service.initialize()?;

    let table = config.store.qualified_table();
    if output::is_json() {
        output::json_output(json!({
            "command": "init",
            "status": "ready",
            "table": table,
            "primary": config.store.primary,
        }));
        return Ok(());
    }

    output::success("Guest table ready");
    output::field("Table", &table);
    output::field("Database", &config.store.primary);
    if let Some(fallback) = &config.store.fallback {
        output::field("Fallback", fallback);
    }
    Ok(())
}
