use std::time::Duration;

use clap::Args;
use laptrig_client::Event;
use tokio::time::timeout;

use crate::cmd::ConnectArgs;
use crate::exit::{client_error, CliError, CliResult, FAILURE, SUCCESS, TIMEOUT, USAGE};
use crate::output::{print_lap_table, LapRow, OutputFormat};

#[derive(Args, Debug)]
pub struct TableArgs {
    /// Maximum time to wait for each table row (e.g. 5s, 500ms).
    #[arg(long, default_value = "5s")]
    pub timeout: String,
}

pub async fn run(args: TableArgs, connect: &ConnectArgs, format: OutputFormat) -> CliResult<i32> {
    let wait = parse_duration(&args.timeout)?;
    let (client, mut events) = connect.client_with_events().await?;

    let rows = client
        .get_table()
        .await
        .map_err(|err| client_error("table request failed", err))?;

    let mut table = Vec::with_capacity(rows as usize);
    while table.len() < rows as usize {
        let event = timeout(wait, events.recv())
            .await
            .map_err(|_| {
                CliError::new(
                    TIMEOUT,
                    format!("timed out waiting for table row {}", table.len()),
                )
            })?
            .ok_or_else(|| CliError::new(FAILURE, "connection closed while receiving the table"))?;

        match event {
            Event::Table {
                group,
                duration,
                name,
            } => table.push(LapRow {
                group,
                duration_ms: duration,
                name,
            }),
            other => {
                tracing::debug!(kind = other.kind(), "skipping non-table event");
            }
        }
    }

    print_lap_table(&table, format);
    Ok(SUCCESS)
}

fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        _ => Err(CliError::new(
            USAGE,
            format!("unsupported duration unit: {unit}"),
        )),
    }
}
