use clap::Args;

use crate::cmd::ConnectArgs;
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_done, print_name, OutputFormat};

#[derive(Args, Debug)]
pub struct SetNameArgs {
    /// Group to rename.
    pub group: u32,
    /// New display name.
    pub name: String,
}

#[derive(Args, Debug)]
pub struct GetNameArgs {
    /// Group whose name to show.
    pub group: u32,
}

#[derive(Args, Debug)]
pub struct ClearNameArgs {
    /// Group whose name to remove.
    pub group: u32,
}

pub async fn run_set(
    args: SetNameArgs,
    connect: &ConnectArgs,
    format: OutputFormat,
) -> CliResult<i32> {
    let client = connect.client().await?;
    let (group, name) = client
        .set_name(args.group, &args.name)
        .await
        .map_err(|err| client_error("rename failed", err))?;
    print_name(group, &name, format);
    Ok(SUCCESS)
}

pub async fn run_get(
    args: GetNameArgs,
    connect: &ConnectArgs,
    format: OutputFormat,
) -> CliResult<i32> {
    let client = connect.client().await?;
    let (group, name) = client
        .get_name(args.group)
        .await
        .map_err(|err| client_error("name query failed", err))?;
    print_name(group, &name, format);
    Ok(SUCCESS)
}

pub async fn run_clear(
    args: ClearNameArgs,
    connect: &ConnectArgs,
    format: OutputFormat,
) -> CliResult<i32> {
    let client = connect.client().await?;
    let group = client
        .clear_name(args.group)
        .await
        .map_err(|err| client_error("name removal failed", err))?;
    print_done("name removed", Some(group), format);
    Ok(SUCCESS)
}
