//! The session driver: one task owns the transport, the FIFO command queue,
//! and the single pending slot.

use std::collections::VecDeque;

use laptrig_codec::{decode_frame, encode_command, Inbound};
use laptrig_transport::Transport;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::client::{ClosedHook, EventObserver};
use crate::command::Command;
use crate::error::ClientError;

pub(crate) struct Session<T> {
    transport: T,
    queue: VecDeque<Command>,
    pending: Option<Command>,
    observer: Option<EventObserver>,
    on_closed: Option<ClosedHook>,
}

impl<T: Transport> Session<T> {
    pub(crate) fn new(
        transport: T,
        observer: Option<EventObserver>,
        on_closed: Option<ClosedHook>,
    ) -> Self {
        Self {
            transport,
            queue: VecDeque::new(),
            pending: None,
            observer,
            on_closed,
        }
    }

    /// Drive the session until the transport closes or every client handle
    /// has been dropped.
    pub(crate) async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => self.submit(command).await,
                    // Every handle dropped: shut the connection down.
                    None => {
                        let _ = self.transport.close().await;
                        break;
                    }
                },
                frame = self.transport.recv() => match frame {
                    Some(Ok(raw)) => self.on_frame(&raw).await,
                    Some(Err(err)) => warn!(error = %err, "transport receive error"),
                    None => break,
                },
            }
        }
        self.shutdown(commands);
    }

    /// Queue a command; transmit it right away when nothing is in flight.
    async fn submit(&mut self, command: Command) {
        self.queue.push_back(command);
        if self.pending.is_none() {
            self.send_next().await;
        }
    }

    /// Dequeue and transmit until one command is in flight.
    ///
    /// A send failure rejects only the affected command; the next queued
    /// one is attempted right away.
    async fn send_next(&mut self) {
        while let Some(command) = self.queue.pop_front() {
            let frame = encode_command(command.verb, command.parameter.as_deref());
            debug!(command = %frame, "sending");
            match self.transport.send(&frame).await {
                Ok(()) => {
                    self.pending = Some(command);
                    break;
                }
                Err(err) => {
                    let _ = command.completion.send(Err(ClientError::Transport(err)));
                }
            }
        }
    }

    /// Route one inbound frame.
    ///
    /// Events never touch the queue or the pending slot. Replies require a
    /// pending command; resolving one immediately transmits the next.
    async fn on_frame(&mut self, raw: &str) {
        debug!(frame = %raw, "received");
        match decode_frame(raw) {
            Ok(Inbound::Event(event)) => {
                if let Some(observer) = &self.observer {
                    observer(event);
                }
            }
            Ok(Inbound::Ack(fields)) => match self.pending.take() {
                Some(command) => {
                    let result = command
                        .verb
                        .decode_reply(&fields)
                        .map_err(ClientError::Codec);
                    let _ = command.completion.send(result);
                    self.send_next().await;
                }
                None => error!(frame = %raw, "reply without a pending command"),
            },
            Ok(Inbound::Failure(tag)) => match self.pending.take() {
                Some(command) => {
                    let _ = command.completion.send(Err(ClientError::CommandFailed {
                        verb: command.verb,
                        tag,
                    }));
                    self.send_next().await;
                }
                None => error!(frame = %raw, "reply without a pending command"),
            },
            Err(err) => warn!(error = %err, frame = %raw, "dropping undecodable frame"),
        }
    }

    /// Notify the closed hook, then reject everything still outstanding —
    /// the pending command, the queue, and submissions not yet received.
    fn shutdown(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        if let Some(hook) = self.on_closed.take() {
            hook();
        }

        commands.close();
        let mut outstanding: Vec<Command> = self.pending.take().into_iter().collect();
        outstanding.extend(self.queue.drain(..));
        while let Ok(command) = commands.try_recv() {
            outstanding.push(command);
        }
        for command in outstanding {
            let _ = command
                .completion
                .send(Err(ClientError::Aborted { verb: command.verb }));
        }
    }
}
