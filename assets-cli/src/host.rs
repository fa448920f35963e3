//! Console panel host
//!
//! Renders panel effects on the terminal. The "clipboard" is stdout: the hash
//! is printed alone on a line so it can be piped into `pbcopy`/`xclip`.

use lib_assets::{ActivityRecord, AssetError, AssetResult, Notice, PanelHost};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

use crate::output::Output;

pub struct ConsoleHost<'a> {
    output: &'a dyn Output,
    closed: AtomicBool,
}

impl<'a> ConsoleHost<'a> {
    pub fn new(output: &'a dyn Output) -> Self {
        Self {
            output,
            closed: AtomicBool::new(false),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl PanelHost for ConsoleHost<'_> {
    fn notify(&self, notice: Notice) {
        if let Err(e) = self.output.notice(notice) {
            warn!(error = %e, notice = %notice, "failed to print notice");
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> AssetResult<()> {
        self.output
            .print(text)
            .map_err(|e| AssetError::Clipboard(e.to_string()))
    }

    fn open_activity_details(&self, activity: Option<&ActivityRecord>) {
        let Some(activity) = activity else {
            return;
        };
        if let Err(e) = self.output.activity_details(activity) {
            warn!(error = %e, hash = %activity.hash, "failed to print activity details");
        }
    }

    fn close(&self) {
        debug!("panel closed");
        self.closed.store(true, Ordering::SeqCst);
    }
}
