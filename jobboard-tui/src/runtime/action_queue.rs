use jobboard::Confirmation;
use std::path::PathBuf;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// User intents that mutate the store or touch the filesystem.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    SubmitRecordForm,
    CycleStatus { record_id: String },
    ResolveDelete { confirmation: Confirmation },
    ImportFile { path: PathBuf },
    ExportTemplate,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
