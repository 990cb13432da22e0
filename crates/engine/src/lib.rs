//! Engine module - queued actions driven through the rules engine
//!
//! The input layer pushes [`GameAction`](types::GameAction)s onto a session's
//! queue from anywhere (fire-and-forget). The owner of the session drives
//! [`GameSession::process_action`] once per turn; each call waits until an
//! action is available, resolves exactly one, and returns its events.
//!
//! # Concurrency
//!
//! - One consumer per session; producers hold cloneable [`ActionSender`]s
//! - Waiting is a [`tokio::sync::Notify`] wakeup, not a timed poll
//! - Dropping the `process_action` future cancels the wait; nothing is lost
//!
//! # Collaborators
//!
//! - [`EventSink`]: subscribers receive every event in emission order
//! - [`ExtraActionHandler`]: receives `Magic` and `CheatCode` actions
//!
//! # Example
//!
//! ```
//! use tile_merge_engine::{GameSession, SessionConfig};
//! use tile_merge_engine::types::{Direction, GameAction, GameEvent};
//!
//! # tokio_test::block_on(async {
//! let mut session = GameSession::from_config(&SessionConfig::default(), 7);
//! session.queue_action(GameAction::Start { serialized_state: None });
//! session.queue_action(GameAction::Move { direction: Direction::Up });
//!
//! let events = session.process_action().await.unwrap();
//! assert_eq!(events[0], GameEvent::GameStarted);
//! assert_eq!(session.pending_actions().len(), 1);
//! # });
//! ```

pub mod config;
pub mod queue;
pub mod session;

pub use tile_merge_core as core;
pub use tile_merge_types as types;

pub use config::SessionConfig;
pub use queue::{ActionQueue, ActionSender};
pub use session::{EventSink, ExtraActionHandler, GameSession, IgnoreExtras};
