//! Handlers for the `db` command group.

use std::io::Write;

use crate::adapter::inbound::cli::output::Output;
use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use crate::application::seed::seed;
use crate::application::Context;
use crate::error::Result;
use crate::port::outbound::store::CatalogStore;

/// Execute `db migrate`.
pub fn execute_migrate<W: Write>(database: &str, ctx: &Context, out: &mut Output<W>) -> Result<()> {
    let applied = {
        let _log = ctx.enter();
        let pool = create_pool(database)?;
        run_migrations(&pool)?
    };

    out.section("Database")?;
    out.field("Path", database)?;
    if applied == 0 {
        out.note("Schema is up to date")
    } else {
        out.success(&format!("Applied {applied} migration(s)"))
    }
}

/// Execute `db seed`.
pub fn execute_seed<S, W>(store: &S, ctx: &Context, out: &mut Output<W>) -> Result<()>
where
    S: CatalogStore + ?Sized,
    W: Write,
{
    let seeded = {
        let _log = ctx.enter();
        seed(store)?
    };

    if seeded.is_empty() {
        return out.warning("Catalog already has data; nothing seeded");
    }
    out.section("Demo Catalog")?;
    out.field("Suppliers", seeded.suppliers)?;
    out.field("Categories", seeded.categories)?;
    out.field("Products", seeded.products)?;
    out.success("Seeded demo catalog")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::inbound::cli::output::OutputConfig;
    use crate::application::WorkflowSettings;
    use crate::testkit::store::MemoryStore;

    fn ctx() -> Context {
        Context::silent(WorkflowSettings::default())
    }

    #[test]
    fn migrate_reports_applied_then_up_to_date() {
        let dir = tempfile::tempdir().unwrap();
        let database = dir.path().join("catalog.db").display().to_string();

        let mut out = Output::new(Vec::new(), OutputConfig::default());
        execute_migrate(&database, &ctx(), &mut out).unwrap();
        execute_migrate(&database, &ctx(), &mut out).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("Applied 1 migration(s)"));
        assert!(text.contains("Schema is up to date"));
    }

    #[test]
    fn seed_twice_warns_the_second_time() {
        let store = MemoryStore::empty();
        let mut out = Output::new(Vec::new(), OutputConfig::new(true, false));

        execute_seed(&store, &ctx(), &mut out).unwrap();
        execute_seed(&store, &ctx(), &mut out).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        let kinds: Vec<String> = text
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["type"].to_string())
            .collect();
        assert_eq!(kinds.first().map(String::as_str), Some("\"section\""));
        assert_eq!(kinds.last().map(String::as_str), Some("\"warning\""));
        assert_eq!(store.product_count(), 6);
    }
}
