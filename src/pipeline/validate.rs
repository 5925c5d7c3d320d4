// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::Config;
use crate::services::YearCatalog;
use crate::utils::log;

/// Validate configuration and the class catalog, reporting what was checked.
pub fn run_validate(config: &Config) -> Result<()> {
    log::header("Validating configuration");

    if let Err(e) = config.validate() {
        log::error(&format!("Config validation failed: {e}"));
        return Err(e);
    }
    log::success("✓ Config OK");
    log::sub_item(&format!("Document: {}", config.sheets.document_id));
    log::sub_item(&format!("Roster sheet: {}", config.sheets.login_sheet));
    log::sub_item(&format!("Timeout: {}s", config.http.timeout_secs));
    log::sub_item(&format!("Cache TTL: {}s", config.cache.ttl_secs));

    let catalog = match YearCatalog::new() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error(&format!("Catalog validation failed: {e}"));
            return Err(e);
        }
    };
    log::success("✓ Class catalog OK");
    log::sub_item(&format!("Classes: {}", catalog.years().len()));
    log::sub_item(&format!("Units: {}", catalog.groups().len()));

    Ok(())
}
