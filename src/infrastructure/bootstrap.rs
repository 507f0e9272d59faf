//! Composition root: turns a [`Config`] into a ready store and context.

use tracing::info;

use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use crate::adapter::outbound::sqlite::SqliteCatalogStore;
use crate::application::context::Context;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Everything one command needs.
pub struct Session {
    pub config: Config,
    pub store: SqliteCatalogStore,
    pub context: Context,
}

/// Open the database at `database`, migrating it to the current schema.
///
/// # Errors
/// Returns an error if the pool cannot be created or a migration fails.
pub fn open_store(database: &str) -> Result<SqliteCatalogStore> {
    let pool = create_pool(database)?;
    run_migrations(&pool)?;
    Ok(SqliteCatalogStore::new(pool))
}

/// Build the log sink, then the store, and bundle them with `config`.
///
/// # Errors
/// Returns an error if the log file or the database cannot be opened.
pub fn build(config: Config) -> Result<Session> {
    let context = Context::new(config.workflow, config.logging.dispatch()?);
    let store = {
        let _log = context.enter();
        info!(database = %config.database, "Opening catalog");
        open_store(&config.database)?
    };
    Ok(Session {
        config,
        store,
        context,
    })
}
