use anyhow::Result;

use super::{CommandResult, CommandSummary, ListSummary};
use crate::{cli::args::ListCommand, core::RouteContext};

pub fn list(cmd: ListCommand) -> Result<CommandResult> {
    let ctx = RouteContext::new(&cmd.common)?;
    let routes = ctx.resolve()?;
    let count = routes.len();

    Ok(CommandResult::new(
        CommandSummary::List(ListSummary {
            routes,
            root_dir: ctx.config.root_dir.clone(),
            build_output: ctx.build_output(),
            json: cmd.json,
        }),
        Vec::new(),
        count,
    ))
}
