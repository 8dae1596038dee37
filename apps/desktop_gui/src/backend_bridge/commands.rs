//! Backend commands queued from UI to backend worker.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    Search { generation: u64, question: String },
}
