use clap::{Args, Subcommand};
use laptrig_client::{Client, ConnectOptions, Event};
use laptrig_transport::Endpoint;
use tokio::sync::mpsc;

use crate::exit::{client_error, CliResult};
use crate::output::OutputFormat;

pub mod clear;
pub mod groups;
pub mod listen;
pub mod name;
pub mod reject;
pub mod release;
pub mod table;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Release a group's starter.
    Release(release::ReleaseArgs),
    /// Show the configured number of groups.
    Groups(groups::GroupsArgs),
    /// Resize the number of groups.
    SetGroups(groups::SetGroupsArgs),
    /// Fetch and render the lap table.
    Table(table::TableArgs),
    /// Clear a group's lap time.
    Clear(clear::ClearArgs),
    /// Set a group's display name.
    SetName(name::SetNameArgs),
    /// Show a group's display name.
    GetName(name::GetNameArgs),
    /// Remove a group's display name.
    ClearName(name::ClearNameArgs),
    /// Reject the pending run.
    Reject(reject::RejectArgs),
    /// Print device events as they arrive.
    Listen(listen::ListenArgs),
}

pub async fn run(command: Command, connect: &ConnectArgs, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Release(args) => release::run(args, connect, format).await,
        Command::Groups(args) => groups::run_get(args, connect, format).await,
        Command::SetGroups(args) => groups::run_set(args, connect, format).await,
        Command::Table(args) => table::run(args, connect, format).await,
        Command::Clear(args) => clear::run(args, connect, format).await,
        Command::SetName(args) => name::run_set(args, connect, format).await,
        Command::GetName(args) => name::run_get(args, connect, format).await,
        Command::ClearName(args) => name::run_clear(args, connect, format).await,
        Command::Reject(args) => reject::run(args, connect, format).await,
        Command::Listen(args) => listen::run(args, connect, format).await,
    }
}

/// Connection parameters shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ConnectArgs {
    /// Device host name or address.
    #[arg(long, global = true, default_value = "192.168.4.1")]
    pub host: String,

    /// Device WebSocket port.
    #[arg(long, global = true, default_value_t = 81)]
    pub port: u16,

    /// URL scheme (ws or wss).
    #[arg(long, global = true, default_value = "ws")]
    pub scheme: String,

    /// URL path of the socket endpoint.
    #[arg(long, global = true, default_value = "/")]
    pub path: String,
}

impl ConnectArgs {
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(&self.scheme, &self.host, self.port, &self.path)
    }

    /// Connect a plain client with no event observer.
    pub async fn client(&self) -> CliResult<Client> {
        Client::connect(ConnectOptions::new(self.endpoint()))
            .await
            .map_err(|err| client_error("connect failed", err))
    }

    /// Connect a client that forwards device events into a channel.
    pub async fn client_with_events(
        &self,
    ) -> CliResult<(Client, mpsc::UnboundedReceiver<Event>)> {
        let (events_tx, events) = mpsc::unbounded_channel();
        let options = ConnectOptions::new(self.endpoint()).on_event(move |event| {
            let _ = events_tx.send(event);
        });
        let client = Client::connect(options)
            .await
            .map_err(|err| client_error("connect failed", err))?;
        Ok((client, events))
    }
}
