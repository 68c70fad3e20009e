use laptrig_codec::{Event, Reply, Verb, FIELD_SEPARATOR};
use laptrig_transport::{Endpoint, Transport, WsTransport};
use tokio::sync::{mpsc, oneshot};

use crate::command::Command;
use crate::error::{ClientError, Result};
use crate::session::Session;

/// Callback invoked for every decoded device event.
pub type EventObserver = Box<dyn Fn(Event) + Send>;

/// Callback invoked once when the connection closes.
pub type ClosedHook = Box<dyn FnOnce() + Send>;

/// Options for [`Client::connect`].
pub struct ConnectOptions {
    endpoint: Endpoint,
    on_event: Option<EventObserver>,
    on_closed: Option<ClosedHook>,
}

impl ConnectOptions {
    /// Connect options for the given endpoint, with no callbacks.
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            on_event: None,
            on_closed: None,
        }
    }

    /// Register the event observer. Single slot; the last call wins.
    pub fn on_event(mut self, observer: impl Fn(Event) + Send + 'static) -> Self {
        self.on_event = Some(Box::new(observer));
        self
    }

    /// Register the closed notification. Single slot; the last call wins.
    pub fn on_closed(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_closed = Some(Box::new(hook));
        self
    }
}

/// Handle to a running device session.
///
/// The session itself is a spawned driver task that owns the transport, the
/// FIFO queue, and the single in-flight slot; handles only submit commands
/// and await their completions. Handles are cheap to clone. Dropping the
/// last one closes the connection.
#[derive(Clone, Debug)]
pub struct Client {
    commands: mpsc::UnboundedSender<Command>,
}

impl Client {
    /// Validate the endpoint, open the WebSocket, and start the session.
    ///
    /// Validation runs synchronously before any I/O: a bad endpoint never
    /// constructs a transport, and the callbacks are registered only once
    /// validation has passed. The returned future resolves when the socket
    /// is open and fails if the connection cannot be established.
    pub async fn connect(options: ConnectOptions) -> Result<Self> {
        options.endpoint.validate()?;
        let transport = WsTransport::connect(&options.endpoint).await?;
        Ok(Self::with_transport(
            transport,
            options.on_event,
            options.on_closed,
        ))
    }

    /// Start a session over an already-open transport.
    ///
    /// This is the seam for custom transports and for tests.
    pub fn with_transport<T>(
        transport: T,
        on_event: Option<EventObserver>,
        on_closed: Option<ClosedHook>,
    ) -> Self
    where
        T: Transport + 'static,
    {
        let (commands, receiver) = mpsc::unbounded_channel();
        let session = Session::new(transport, on_event, on_closed);
        tokio::spawn(session.run(receiver));
        Self { commands }
    }

    /// Release the given group's starter. Resolves to the raw byte values
    /// reported by the hardware.
    pub async fn release(&self, group: u32) -> Result<Vec<u8>> {
        match self.execute(Verb::Release, Some(group.to_string())).await? {
            Reply::Released { data } => Ok(data),
            _ => Err(ClientError::UnexpectedReply {
                verb: Verb::Release,
            }),
        }
    }

    /// Number of groups the device is configured with.
    pub async fn get_groups(&self) -> Result<u32> {
        match self.execute(Verb::GetGroups, None).await? {
            Reply::Groups { count } => Ok(count),
            _ => Err(ClientError::UnexpectedReply {
                verb: Verb::GetGroups,
            }),
        }
    }

    /// Resize the number of groups.
    pub async fn set_groups(&self, count: u32) -> Result<()> {
        match self
            .execute(Verb::SetGroups, Some(count.to_string()))
            .await?
        {
            Reply::GroupsSet => Ok(()),
            _ => Err(ClientError::UnexpectedReply {
                verb: Verb::SetGroups,
            }),
        }
    }

    /// Request the lap table. Resolves to the number of rows the device
    /// will stream as `TABLE` events to the registered observer.
    pub async fn get_table(&self) -> Result<u32> {
        match self.execute(Verb::GetTable, None).await? {
            Reply::Table { rows } => Ok(rows),
            _ => Err(ClientError::UnexpectedReply {
                verb: Verb::GetTable,
            }),
        }
    }

    /// Clear a group's lap time. Resolves to the cleared group index.
    pub async fn clear_group(&self, group: u32) -> Result<u32> {
        match self.execute(Verb::Clear, Some(group.to_string())).await? {
            Reply::Cleared { group } => Ok(group),
            _ => Err(ClientError::UnexpectedReply { verb: Verb::Clear }),
        }
    }

    /// Set a group's display name. The name must not contain the `;` frame
    /// separator. Resolves to the index and name the device stored.
    pub async fn set_name(&self, group: u32, name: &str) -> Result<(u32, String)> {
        if name.contains(FIELD_SEPARATOR) {
            return Err(ClientError::InvalidArgument(format!(
                "group name must not contain {FIELD_SEPARATOR:?}: {name:?}"
            )));
        }
        match self
            .execute(Verb::SetName, Some(format!("{group}:{name}")))
            .await?
        {
            Reply::Name { group, name } => Ok((group, name)),
            _ => Err(ClientError::UnexpectedReply {
                verb: Verb::SetName,
            }),
        }
    }

    /// Fetch a group's display name.
    pub async fn get_name(&self, group: u32) -> Result<(u32, String)> {
        match self.execute(Verb::GetName, Some(group.to_string())).await? {
            Reply::Name { group, name } => Ok((group, name)),
            _ => Err(ClientError::UnexpectedReply {
                verb: Verb::GetName,
            }),
        }
    }

    /// Remove a group's display name. Resolves to the group index.
    pub async fn clear_name(&self, group: u32) -> Result<u32> {
        match self
            .execute(Verb::ClearName, Some(group.to_string()))
            .await?
        {
            Reply::NameCleared { group } => Ok(group),
            _ => Err(ClientError::UnexpectedReply {
                verb: Verb::ClearName,
            }),
        }
    }

    /// Reject the pending run.
    pub async fn reject_run(&self) -> Result<()> {
        match self.execute(Verb::RejectRun, None).await? {
            Reply::RunRejected => Ok(()),
            _ => Err(ClientError::UnexpectedReply {
                verb: Verb::RejectRun,
            }),
        }
    }

    /// Submit one command and wait for the matching reply.
    ///
    /// Commands hit the wire strictly in submission order, one at a time.
    /// There is no timeout: a command waits until its reply arrives or the
    /// connection closes. Once submitted it cannot be withdrawn.
    async fn execute(&self, verb: Verb, parameter: Option<String>) -> Result<Reply> {
        let (completion, reply) = oneshot::channel();
        self.commands
            .send(Command {
                verb,
                parameter,
                completion,
            })
            .map_err(|_| ClientError::NotConnected)?;
        reply.await.map_err(|_| ClientError::Aborted { verb })?
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use laptrig_codec::CodecError;
    use laptrig_transport::TransportError;
    use tokio::time::timeout;

    use super::*;

    struct MockTransport {
        outbound: mpsc::UnboundedSender<String>,
        inbound: mpsc::UnboundedReceiver<String>,
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send(&mut self, frame: &str) -> laptrig_transport::Result<()> {
            self.outbound
                .send(frame.to_string())
                .map_err(|_| TransportError::Closed)
        }

        async fn recv(&mut self) -> Option<laptrig_transport::Result<String>> {
            self.inbound.recv().await.map(Ok)
        }

        async fn close(&mut self) -> laptrig_transport::Result<()> {
            self.inbound.close();
            Ok(())
        }
    }

    struct Harness {
        client: Client,
        sent: mpsc::UnboundedReceiver<String>,
        device: mpsc::UnboundedSender<String>,
    }

    fn harness() -> Harness {
        harness_with(None, None)
    }

    fn harness_with(on_event: Option<EventObserver>, on_closed: Option<ClosedHook>) -> Harness {
        let (outbound, sent) = mpsc::unbounded_channel();
        let (device, inbound) = mpsc::unbounded_channel();
        let transport = MockTransport { outbound, inbound };
        Harness {
            client: Client::with_transport(transport, on_event, on_closed),
            sent,
            device,
        }
    }

    async fn next_sent(sent: &mut mpsc::UnboundedReceiver<String>) -> String {
        timeout(Duration::from_secs(1), sent.recv())
            .await
            .expect("timed out waiting for an outgoing frame")
            .expect("session ended unexpectedly")
    }

    #[tokio::test]
    async fn commands_are_sent_one_at_a_time_in_submission_order() {
        let Harness {
            client,
            mut sent,
            device,
        } = harness();

        let driver = async {
            assert_eq!(next_sent(&mut sent).await, "GET_GROUPS");
            // Nothing else may go out while the first reply is outstanding.
            assert!(sent.try_recv().is_err());
            device.send("ACK;2".to_string()).unwrap();

            assert_eq!(next_sent(&mut sent).await, "SET_GROUPS;4");
            assert!(sent.try_recv().is_err());
            device.send("ACK".to_string()).unwrap();

            assert_eq!(next_sent(&mut sent).await, "REJECT_RUN");
            device.send("ACK".to_string()).unwrap();
        };

        let (groups, resize, reject, ()) = tokio::join!(
            client.get_groups(),
            client.set_groups(4),
            client.reject_run(),
            driver
        );

        assert_eq!(groups.unwrap(), 2);
        resize.unwrap();
        reject.unwrap();
    }

    #[tokio::test]
    async fn release_resolves_to_hex_bytes() {
        let Harness {
            client,
            mut sent,
            device,
        } = harness();

        let driver = async {
            assert_eq!(next_sent(&mut sent).await, "RELEASE;3");
            device.send("ACK;1a;2b;ff".to_string()).unwrap();
        };

        let (released, ()) = tokio::join!(client.release(3), driver);
        assert_eq!(released.unwrap(), vec![26, 43, 255]);
    }

    #[tokio::test]
    async fn table_and_name_operations_decode_their_replies() {
        let Harness {
            client,
            mut sent,
            device,
        } = harness();

        let driver = async {
            assert_eq!(next_sent(&mut sent).await, "GET_TABLE");
            device.send("ACK;4".to_string()).unwrap();
            assert_eq!(next_sent(&mut sent).await, "GET_NAME;2");
            device.send("ACK;2;Alpha".to_string()).unwrap();
            assert_eq!(next_sent(&mut sent).await, "CLEAR_NAME;2");
            device.send("ACK;2".to_string()).unwrap();
            assert_eq!(next_sent(&mut sent).await, "CLEAR;1");
            device.send("ACK;1".to_string()).unwrap();
        };

        let (rows, name, cleared_name, cleared, ()) = tokio::join!(
            client.get_table(),
            client.get_name(2),
            client.clear_name(2),
            client.clear_group(1),
            driver
        );

        assert_eq!(rows.unwrap(), 4);
        assert_eq!(name.unwrap(), (2, "Alpha".to_string()));
        assert_eq!(cleared_name.unwrap(), 2);
        assert_eq!(cleared.unwrap(), 1);
    }

    #[tokio::test]
    async fn failure_tag_rejects_pending_and_next_command_goes_out() {
        let Harness {
            client,
            mut sent,
            device,
        } = harness();

        let driver = async {
            assert_eq!(next_sent(&mut sent).await, "CLEAR;1");
            device.send("NACK".to_string()).unwrap();
            assert_eq!(next_sent(&mut sent).await, "GET_GROUPS");
            device.send("ACK;6".to_string()).unwrap();
        };

        let (cleared, groups, ()) = tokio::join!(client.clear_group(1), client.get_groups(), driver);

        let err = cleared.unwrap_err();
        assert!(
            matches!(&err, ClientError::CommandFailed { verb: Verb::Clear, tag } if tag == "NACK"),
            "unexpected error: {err:?}"
        );
        assert_eq!(groups.unwrap(), 6);
    }

    #[tokio::test]
    async fn malformed_reply_rejects_only_the_affected_command() {
        let Harness {
            client,
            mut sent,
            device,
        } = harness();

        let driver = async {
            assert_eq!(next_sent(&mut sent).await, "GET_GROUPS");
            device.send("ACK;banana".to_string()).unwrap();
            assert_eq!(next_sent(&mut sent).await, "REJECT_RUN");
            device.send("ACK".to_string()).unwrap();
        };

        let (groups, reject, ()) = tokio::join!(client.get_groups(), client.reject_run(), driver);

        assert!(matches!(
            groups.unwrap_err(),
            ClientError::Codec(CodecError::InvalidNumber { .. })
        ));
        reject.unwrap();
    }

    #[tokio::test]
    async fn events_reach_the_observer() {
        let (events_tx, mut events) = mpsc::unbounded_channel();
        let Harness { client, device, .. } = harness_with(
            Some(Box::new(move |event| {
                let _ = events_tx.send(event);
            })),
            None,
        );

        device.send("EVT;FINISHED;120;3".to_string()).unwrap();

        let event = timeout(Duration::from_secs(1), events.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            event,
            Event::Finished {
                duration: 120,
                active_group: 3,
            }
        );

        drop(client);
    }

    #[tokio::test]
    async fn event_during_a_pending_command_does_not_resolve_it() {
        let (events_tx, mut events) = mpsc::unbounded_channel();
        let Harness {
            client,
            mut sent,
            device,
        } = harness_with(
            Some(Box::new(move |event| {
                let _ = events_tx.send(event);
            })),
            None,
        );

        let driver = async {
            assert_eq!(next_sent(&mut sent).await, "GET_GROUPS");
            device.send("EVT;STARTED".to_string()).unwrap();
            device.send("ACK;7".to_string()).unwrap();
        };

        let (groups, ()) = tokio::join!(client.get_groups(), driver);
        assert_eq!(groups.unwrap(), 7);
        assert_eq!(
            timeout(Duration::from_secs(1), events.recv())
                .await
                .unwrap()
                .unwrap(),
            Event::Started
        );
    }

    #[tokio::test]
    async fn orphan_reply_is_ignored_and_session_stays_usable() {
        let (events_tx, mut events) = mpsc::unbounded_channel();
        let Harness {
            client,
            mut sent,
            device,
        } = harness_with(
            Some(Box::new(move |event| {
                let _ = events_tx.send(event);
            })),
            None,
        );

        // An unsolicited reply with nothing pending, followed by an event so
        // the test can tell when the orphan has been consumed.
        device.send("ACK;10".to_string()).unwrap();
        device.send("EVT;STARTED".to_string()).unwrap();
        timeout(Duration::from_secs(1), events.recv())
            .await
            .unwrap()
            .unwrap();

        let driver = async {
            assert_eq!(next_sent(&mut sent).await, "GET_GROUPS");
            device.send("ACK;2".to_string()).unwrap();
        };
        let (groups, ()) = tokio::join!(client.get_groups(), driver);
        assert_eq!(groups.unwrap(), 2);
    }

    #[tokio::test]
    async fn undecodable_frame_does_not_affect_the_pending_command() {
        let Harness {
            client,
            mut sent,
            device,
        } = harness();

        let driver = async {
            assert_eq!(next_sent(&mut sent).await, "GET_GROUPS");
            device.send("EVT;WARP;9".to_string()).unwrap();
            device.send("ACK;3".to_string()).unwrap();
        };

        let (groups, ()) = tokio::join!(client.get_groups(), driver);
        assert_eq!(groups.unwrap(), 3);
    }

    #[tokio::test]
    async fn close_rejects_outstanding_commands_and_notifies() {
        let (closed_tx, closed_rx) = oneshot::channel();
        let Harness {
            client,
            mut sent,
            device,
        } = harness_with(
            None,
            Some(Box::new(move || {
                let _ = closed_tx.send(());
            })),
        );

        let driver = async {
            assert_eq!(next_sent(&mut sent).await, "GET_GROUPS");
            // First command in flight, second still queued; close now.
            drop(device);
        };

        let (first, second, ()) = tokio::join!(client.get_groups(), client.get_name(1), driver);
        assert!(matches!(
            first.unwrap_err(),
            ClientError::Aborted {
                verb: Verb::GetGroups
            }
        ));
        assert!(matches!(
            second.unwrap_err(),
            ClientError::Aborted {
                verb: Verb::GetName
            }
        ));

        timeout(Duration::from_secs(1), closed_rx)
            .await
            .unwrap()
            .unwrap();

        let err = client.get_groups().await.unwrap_err();
        assert!(matches!(err, ClientError::NotConnected));
    }

    #[tokio::test]
    async fn dropping_every_handle_closes_the_session() {
        let (closed_tx, closed_rx) = oneshot::channel();
        let Harness {
            client,
            sent: _sent,
            device: _device,
        } = harness_with(
            None,
            Some(Box::new(move || {
                let _ = closed_tx.send(());
            })),
        );

        drop(client);
        timeout(Duration::from_secs(1), closed_rx)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn set_name_encodes_group_and_name() {
        let Harness {
            client,
            mut sent,
            device,
        } = harness();

        let driver = async {
            assert_eq!(next_sent(&mut sent).await, "SET_NAME;2:Alpha");
            device.send("ACK;2;Alpha".to_string()).unwrap();
        };

        let (stored, ()) = tokio::join!(client.set_name(2, "Alpha"), driver);
        assert_eq!(stored.unwrap(), (2, "Alpha".to_string()));
    }

    #[tokio::test]
    async fn set_name_rejects_separator_in_name() {
        let Harness {
            client, mut sent, ..
        } = harness();

        let err = client.set_name(2, "Al;pha").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidArgument(_)));
        assert!(sent.try_recv().is_err(), "nothing may be enqueued");
    }

    #[tokio::test]
    async fn connect_rejects_invalid_endpoint_before_any_io() {
        let endpoint = Endpoint::new("http", "device.local", 81, "/");
        let err = Client::connect(ConnectOptions::new(endpoint))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Transport(TransportError::InvalidEndpoint(_))
        ));
    }
}
