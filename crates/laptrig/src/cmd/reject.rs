use clap::Args;

use crate::cmd::ConnectArgs;
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_done, OutputFormat};

#[derive(Args, Debug, Default)]
pub struct RejectArgs {}

pub async fn run(_args: RejectArgs, connect: &ConnectArgs, format: OutputFormat) -> CliResult<i32> {
    let client = connect.client().await?;
    client
        .reject_run()
        .await
        .map_err(|err| client_error("reject failed", err))?;
    print_done("run rejected", None, format);
    Ok(SUCCESS)
}
