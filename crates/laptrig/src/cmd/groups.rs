use clap::Args;

use crate::cmd::ConnectArgs;
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_done, print_groups, OutputFormat};

#[derive(Args, Debug, Default)]
pub struct GroupsArgs {}

#[derive(Args, Debug)]
pub struct SetGroupsArgs {
    /// New number of groups.
    pub count: u32,
}

pub async fn run_get(
    _args: GroupsArgs,
    connect: &ConnectArgs,
    format: OutputFormat,
) -> CliResult<i32> {
    let client = connect.client().await?;
    let count = client
        .get_groups()
        .await
        .map_err(|err| client_error("group query failed", err))?;
    print_groups(count, format);
    Ok(SUCCESS)
}

pub async fn run_set(
    args: SetGroupsArgs,
    connect: &ConnectArgs,
    format: OutputFormat,
) -> CliResult<i32> {
    let client = connect.client().await?;
    client
        .set_groups(args.count)
        .await
        .map_err(|err| client_error("group resize failed", err))?;
    print_done("groups resized", None, format);
    Ok(SUCCESS)
}
