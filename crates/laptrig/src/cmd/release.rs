use clap::Args;

use crate::cmd::ConnectArgs;
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_release, OutputFormat};

#[derive(Args, Debug)]
pub struct ReleaseArgs {
    /// Group to release.
    pub group: u32,
}

pub async fn run(args: ReleaseArgs, connect: &ConnectArgs, format: OutputFormat) -> CliResult<i32> {
    let client = connect.client().await?;
    let data = client
        .release(args.group)
        .await
        .map_err(|err| client_error("release failed", err))?;
    print_release(args.group, &data, format);
    Ok(SUCCESS)
}
