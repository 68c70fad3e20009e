use clap::Args;

use crate::cmd::ConnectArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_event, OutputFormat};

#[derive(Args, Debug, Default)]
pub struct ListenArgs {
    /// Exit after printing N events.
    #[arg(long)]
    pub count: Option<usize>,
}

pub async fn run(args: ListenArgs, connect: &ConnectArgs, format: OutputFormat) -> CliResult<i32> {
    // The client handle must stay alive: dropping it closes the session.
    let (_client, mut events) = connect.client_with_events().await?;

    let mut printed = 0usize;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            event = events.recv() => match event {
                Some(event) => {
                    print_event(&event, format);
                    printed = printed.saturating_add(1);
                    if let Some(count) = args.count {
                        if printed >= count {
                            break;
                        }
                    }
                }
                None => break,
            },
        }
    }

    Ok(SUCCESS)
}
