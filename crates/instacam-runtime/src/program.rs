#![forbid(unsafe_code)]

//! The program loop: owns the terminal, drives a [`Model`] with messages
//! from input events, subscriptions, and background tasks, and redraws
//! after every update.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use ratatui::Frame;
use ratatui::crossterm::event;

use crate::subscription::{Subscription, SubscriptionManager};

/// How long to block on terminal input before draining the message channel.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Side effect returned by [`Model::update`].
pub enum Cmd<M> {
    /// Nothing to do.
    None,
    /// Exit the program loop.
    Quit,
    /// Feed another message through `update` immediately.
    Msg(M),
    /// Run several commands in order.
    Batch(Vec<Cmd<M>>),
    /// Run a closure on a background thread; its result is delivered as a
    /// message. Used for the simulated upload delay.
    Task(Box<dyn FnOnce() -> M + Send + 'static>),
}

impl<M> Cmd<M> {
    pub fn task(f: impl FnOnce() -> M + Send + 'static) -> Self {
        Cmd::Task(Box::new(f))
    }
}

/// An application in the init/update/view/subscriptions shape.
pub trait Model {
    /// Message type; terminal events are converted into it so the loop
    /// never needs to know what keys mean.
    type Message: From<event::Event> + Send + 'static;

    /// Runs once before the first draw.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::None
    }

    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    fn view(&self, frame: &mut Frame);

    /// The subscriptions the model wants right now. Reconciled after every
    /// update; see [`crate::subscription`].
    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Self::Message>>> {
        Vec::new()
    }
}

/// Runs a [`Model`] against the real terminal.
pub struct Program<M: Model> {
    model: M,
    sender: mpsc::Sender<M::Message>,
    receiver: mpsc::Receiver<M::Message>,
    quit: bool,
}

impl<M: Model> Program<M> {
    pub fn new(model: M) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            model,
            sender,
            receiver,
            quit: false,
        }
    }

    /// Enter the terminal loop. Restores the terminal before returning,
    /// and hands the final model back for inspection.
    pub fn run(mut self) -> io::Result<M> {
        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal);
        ratatui::restore();
        result.map(|_| self.model)
    }

    fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> io::Result<()> {
        let mut subs = SubscriptionManager::new(self.sender.clone());

        let cmd = self.model.init();
        self.process(cmd);
        subs.reconcile(self.model.subscriptions());

        while !self.quit {
            terminal.draw(|frame| self.model.view(frame))?;

            if event::poll(POLL_INTERVAL)? {
                let ev = event::read()?;
                let cmd = self.model.update(ev.into());
                self.process(cmd);
            }
            while let Ok(msg) = self.receiver.try_recv() {
                let cmd = self.model.update(msg);
                self.process(cmd);
            }

            subs.reconcile(self.model.subscriptions());
        }

        subs.stop_all();
        Ok(())
    }

    fn process(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.quit = true,
            Cmd::Msg(msg) => {
                let next = self.model.update(msg);
                self.process(next);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process(cmd);
                }
            }
            Cmd::Task(f) => {
                let sender = self.sender.clone();
                thread::spawn(move || {
                    let _ = sender.send(f());
                });
            }
        }
    }
}
