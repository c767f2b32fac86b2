use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use client_logging::client_debug;

use crate::client::{ApiSettings, DocQaClient, ReqwestClient};
use crate::{ApiError, ApiEvent, RequestId};

enum ApiCommand {
    Upload { request: RequestId, path: PathBuf },
    Ask { request: RequestId, question: String },
    Stats { request: RequestId },
    Clear { request: RequestId },
}

/// Handle to the background request executor.
///
/// Commands are spawned as independent tasks on a dedicated runtime thread;
/// completions come back as [`ApiEvent`]s via [`ApiHandle::try_recv`].
#[derive(Clone)]
pub struct ApiHandle {
    cmd_tx: mpsc::Sender<ApiCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ApiEvent>>>,
}

impl ApiHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(ReqwestClient::new(settings)?);

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    log::error!("failed to start api runtime: {err}");
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn upload(&self, request: RequestId, path: PathBuf) {
        let _ = self.cmd_tx.send(ApiCommand::Upload { request, path });
    }

    pub fn ask(&self, request: RequestId, question: impl Into<String>) {
        let _ = self.cmd_tx.send(ApiCommand::Ask {
            request,
            question: question.into(),
        });
    }

    pub fn stats(&self, request: RequestId) {
        let _ = self.cmd_tx.send(ApiCommand::Stats { request });
    }

    pub fn clear(&self, request: RequestId) {
        let _ = self.cmd_tx.send(ApiCommand::Clear { request });
    }

    pub fn try_recv(&self) -> Option<ApiEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|rx| rx.try_recv().ok())
    }
}

async fn handle_command(
    client: &dyn DocQaClient,
    command: ApiCommand,
    event_tx: mpsc::Sender<ApiEvent>,
) {
    let event = match command {
        ApiCommand::Upload { request, path } => {
            client_debug!("upload #{request}: {}", path.display());
            let result = client.upload_pdf(&path).await;
            ApiEvent::UploadFinished { request, result }
        }
        ApiCommand::Ask { request, question } => {
            client_debug!("ask #{request}: {} chars", question.len());
            let result = client.ask(&question).await;
            ApiEvent::AnswerArrived { request, result }
        }
        ApiCommand::Stats { request } => {
            let result = client.stats().await;
            ApiEvent::StatsArrived { request, result }
        }
        ApiCommand::Clear { request } => {
            let result = client.clear().await;
            ApiEvent::ClearFinished { request, result }
        }
    };
    let _ = event_tx.send(event);
}
