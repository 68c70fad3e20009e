use clap::Args;

use crate::cmd::ConnectArgs;
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_done, OutputFormat};

#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Group whose lap time to clear.
    pub group: u32,
}

pub async fn run(args: ClearArgs, connect: &ConnectArgs, format: OutputFormat) -> CliResult<i32> {
    let client = connect.client().await?;
    let group = client
        .clear_group(args.group)
        .await
        .map_err(|err| client_error("clear failed", err))?;
    print_done("lap time cleared", Some(group), format);
    Ok(SUCCESS)
}
