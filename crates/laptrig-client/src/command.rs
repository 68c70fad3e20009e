use laptrig_codec::{Reply, Verb};
use tokio::sync::oneshot;

use crate::error::ClientError;

/// A request travelling through the session: the verb, its formatted
/// parameter, and the caller's completion.
#[derive(Debug)]
pub(crate) struct Command {
    pub verb: Verb,
    pub parameter: Option<String>,
    pub completion: oneshot::Sender<Result<Reply, ClientError>>,
}
