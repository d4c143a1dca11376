use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::kernel::Action;

#[derive(Debug)]
pub enum ShellMessage {
    Action(Action),
}

#[derive(Clone)]
pub struct ShellBusSender {
    tx: Sender<ShellMessage>,
}

pub struct ShellBusReceiver {
    rx: Receiver<ShellMessage>,
}

pub fn shell_bus() -> (ShellBusSender, ShellBusReceiver) {
    let (tx, rx) = mpsc::channel();
    (ShellBusSender { tx }, ShellBusReceiver { rx })
}

impl ShellBusSender {
    pub fn send(&self, msg: ShellMessage) -> Result<(), mpsc::SendError<ShellMessage>> {
        self.tx.send(msg)
    }

    pub fn send_action(&self, action: Action) -> Result<(), mpsc::SendError<ShellMessage>> {
        self.send(ShellMessage::Action(action))
    }
}

impl ShellBusReceiver {
    pub fn try_recv(&mut self) -> Result<ShellMessage, TryRecvError> {
        self.rx.try_recv()
    }

    /// Everything queued so far, without blocking.
    pub fn drain_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(ShellMessage::Action(action)) = self.rx.try_recv() {
            actions.push(action);
        }
        actions
    }
}
