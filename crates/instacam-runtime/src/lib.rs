#![forbid(unsafe_code)]

//! A small Elm-style runtime for terminal apps.
//!
//! The shape is the usual one: a [`Model`] owns all state, `update` consumes
//! messages and returns a [`Cmd`], `view` renders into a ratatui frame, and
//! `subscriptions` declares the interval timers the model wants right now.
//! [`Program`] wires those pieces to the real terminal.

pub mod program;
pub mod subscription;

pub use program::{Cmd, Model, Program};
pub use subscription::{Every, MockSubscription, StopSignal, SubId, Subscription, SubscriptionManager};
