use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::{client_info, client_warn};
use docquery_api::{ApiEvent, ApiHandle};
use docquery_core::{Effect, Msg};

/// Bridges the pure state machine to the API engine: effects become
/// commands, completion events come back as messages.
pub struct EffectRunner {
    api: ApiHandle,
}

impl EffectRunner {
    pub fn new(api: ApiHandle, msg_tx: mpsc::Sender<Msg>) -> Self {
        let runner = Self { api };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::UploadPdf { request, path } => {
                    client_info!("upload #{request}: {path}");
                    self.api.upload(request, PathBuf::from(path));
                }
                Effect::AskQuestion { request, question } => {
                    client_info!("ask #{request}: {} chars", question.len());
                    self.api.ask(request, question);
                }
                Effect::FetchStats { request } => {
                    self.api.stats(request);
                }
                Effect::ClearSession { request } => {
                    client_info!("clear #{request}");
                    self.api.clear(request);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let api = self.api.clone();
        thread::spawn(move || loop {
            let Some(event) = api.try_recv() else {
                thread::sleep(Duration::from_millis(20));
                continue;
            };
            let msg = match event {
                ApiEvent::UploadFinished { request, result } => Msg::UploadFinished {
                    request,
                    result: result.map(|_receipt| ()).map_err(|err| err.to_string()),
                },
                ApiEvent::AnswerArrived { request, result } => Msg::AnswerArrived {
                    request,
                    result: result.map_err(|err| err.to_string()),
                },
                ApiEvent::StatsArrived { request, result } => match result {
                    Ok(stats) => Msg::StatsArrived {
                        request,
                        total_chunks: stats.total_chunks,
                    },
                    Err(err) => {
                        // Stats refreshes are best-effort; log and move on.
                        client_warn!("stats refresh #{request} failed: {err}");
                        continue;
                    }
                },
                ApiEvent::ClearFinished { request, result } => Msg::ClearFinished {
                    request,
                    result: result.map_err(|err| err.to_string()),
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        });
    }
}
