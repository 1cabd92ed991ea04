use tokio::sync::mpsc;

use crate::controller::event::ControllerCommand;
use crate::controller::scroll::ScrollMonitor;

/// Cloneable handle used by the display surface to drive the controller.
#[derive(Clone)]
pub struct ControllerHandle {
    commands: mpsc::UnboundedSender<ControllerCommand>,
    scroll: ScrollMonitor,
}

impl ControllerHandle {
    pub(crate) fn new(
        commands: mpsc::UnboundedSender<ControllerCommand>,
        scroll: ScrollMonitor,
    ) -> Self {
        Self { commands, scroll }
    }

    /// Request a pack of the default type.
    ///
    /// Returns `false` only if the controller has stopped. Whether the
    /// request is accepted is decided by the controller and reported as an
    /// event.
    pub fn request_new_pack(&self) -> bool {
        self.send(ControllerCommand::RequestPack { pack: None })
    }

    /// Request a pack of a specific type.
    pub fn request_pack(&self, pack: impl Into<String>) -> bool {
        self.send(ControllerCommand::RequestPack {
            pack: Some(pack.into()),
        })
    }

    pub fn scroll_monitor(&self) -> &ScrollMonitor {
        &self.scroll
    }

    pub fn shutdown(&self) {
        let _ = self.commands.send(ControllerCommand::Shutdown);
    }

    fn send(&self, command: ControllerCommand) -> bool {
        match self.commands.send(command) {
            Ok(()) => true,
            Err(_) => {
                tracing::trace!("Controller command dropped (controller stopped)");
                false
            }
        }
    }
}
