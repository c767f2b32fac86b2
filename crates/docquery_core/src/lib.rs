//! Docquery core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, ChatMessage, Notice, NoticeKind, RequestId, Role, UploadStatus, PLACEHOLDER_MESSAGE,
};
pub use update::update;
pub use view_model::{AppViewModel, MessageView, NoticeView};
