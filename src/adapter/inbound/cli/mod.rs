//! CLI module graph and command dispatch.

pub mod catalog;
pub mod command;
pub mod config;
pub mod db;
pub mod diagnostic;
pub mod menu;
pub mod output;
pub mod paths;
pub mod terminal;

use miette::IntoDiagnostic;

use self::command::{Cli, Commands, ConfigCommand, DbCommand};
use self::menu::Menu;
use self::output::{Output, OutputConfig};
use self::terminal::Terminal;
use crate::application::Context;
use crate::infrastructure::bootstrap;

/// Run the parsed command line to completion.
///
/// # Errors
/// Returns the failure to report; configuration problems arrive as
/// diagnostics that point into the file.
pub fn run(cli: Cli) -> miette::Result<()> {
    let mut out = Output::stdout(OutputConfig::new(cli.json, cli.quiet));
    let explicit = cli.config.as_deref();

    let command = cli.command.unwrap_or(Commands::Menu);
    match &command {
        Commands::Config(ConfigCommand::Init(args)) => {
            let path = config::resolve(explicit);
            return config::execute_init(&path, args.force, &mut out).into_diagnostic();
        }
        Commands::Config(ConfigCommand::Validate) => {
            return config::execute_validate(explicit, &mut out);
        }
        _ => {}
    }

    let mut settings = config::load(explicit)?;
    if let Some(database) = cli.db {
        settings.database = database;
    }

    match command {
        Commands::Config(_) => config::execute_show(&settings, &mut out),
        Commands::Db(DbCommand::Migrate) => {
            let dispatch = settings.logging.dispatch().into_diagnostic()?;
            let ctx = Context::new(settings.workflow, dispatch);
            db::execute_migrate(&settings.database, &ctx, &mut out)
        }
        Commands::Db(DbCommand::Seed) => {
            let session = bootstrap::build(settings).into_diagnostic()?;
            db::execute_seed(&session.store, &session.context, &mut out)
        }
        Commands::Categories(args) => {
            let session = bootstrap::build(settings).into_diagnostic()?;
            catalog::execute_categories(&session.store, &mut out, args.products)
        }
        Commands::Products(args) => {
            let session = bootstrap::build(settings).into_diagnostic()?;
            catalog::execute_products(&session.store, &mut out, args.filter.into())
        }
        Commands::Product(args) => {
            let session = bootstrap::build(settings).into_diagnostic()?;
            catalog::execute_product(&session.store, &mut out, args.id)
        }
        Commands::Menu => {
            let session = bootstrap::build(settings).into_diagnostic()?;
            let terminal = Terminal::stdio(session.config.console.clear_screen);
            Menu::new(&session.store, terminal, &session.context).run()
        }
    }
    .into_diagnostic()
}
