//! Game session - the action processing loop.
//!
//! A session owns one [`Game`] and one [`ActionQueue`]. Each call to
//! [`GameSession::process_action`] takes exactly one queued action, resolves it,
//! publishes the resulting events to every subscribed [`EventSink`], and returns
//! them. Sessions share nothing, so any number can run side by side.

use tracing::{debug, trace};

use crate::config::SessionConfig;
use crate::core::{Game, GameError, RandomSource, SimpleRng};
use crate::queue::{ActionQueue, ActionSender};
use crate::types::{GameAction, GameEvent};

/// Receives every event a session emits, in emission order
pub trait EventSink {
    fn publish(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> EventSink for F {
    fn publish(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Collaborator for actions the rules engine does not interpret
pub trait ExtraActionHandler {
    fn magic(&mut self, spell: &str);
    fn cheat_code(&mut self, code: &str);
}

/// Default handler: drops extra actions
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreExtras;

impl ExtraActionHandler for IgnoreExtras {
    fn magic(&mut self, spell: &str) {
        debug!(spell, "magic ignored");
    }

    fn cheat_code(&mut self, _code: &str) {
        debug!("cheat code ignored");
    }
}

/// One running game fed by an action queue
pub struct GameSession<R = SimpleRng> {
    game: Game<R>,
    queue: ActionQueue,
    extras: Box<dyn ExtraActionHandler + Send>,
    sinks: Vec<Box<dyn EventSink + Send>>,
    turns: u64,
}

impl<R: RandomSource> GameSession<R> {
    pub fn new(config: &SessionConfig, rng: R) -> Self {
        Self {
            game: Game::new(config.grid_size, rng),
            queue: ActionQueue::new(),
            extras: Box::new(IgnoreExtras),
            sinks: Vec::new(),
            turns: 0,
        }
    }

    /// Replace the collaborator that receives `Magic` and `CheatCode`
    pub fn with_extra_handler(mut self, handler: impl ExtraActionHandler + Send + 'static) -> Self {
        self.extras = Box::new(handler);
        self
    }

    /// Register a subscriber
    pub fn subscribe(&mut self, sink: impl EventSink + Send + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    /// Number of actions processed so far
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Enqueue an action; never blocks, never fails
    pub fn queue_action(&self, action: GameAction) {
        self.queue.push(action);
    }

    /// Producer handle for the input layer
    pub fn sender(&self) -> ActionSender {
        self.queue.sender()
    }

    /// Queued actions, oldest first
    pub fn pending_actions(&self) -> Vec<GameAction> {
        self.queue.pending()
    }

    /// Wait for the next action, then resolve it
    ///
    /// Processes exactly one action per call.
    ///
    /// # Errors
    ///
    /// A [`GameError`] means the engine broke an invariant; stop driving
    /// the session.
    pub async fn process_action(&mut self) -> Result<Vec<GameEvent>, GameError> {
        let action = self.queue.pop().await;
        self.resolve(action)
    }

    /// Resolve the next action if one is queued, without waiting
    pub fn try_process_action(&mut self) -> Option<Result<Vec<GameEvent>, GameError>> {
        let action = self.queue.try_pop()?;
        Some(self.resolve(action))
    }

    fn resolve(&mut self, action: GameAction) -> Result<Vec<GameEvent>, GameError> {
        self.turns += 1;
        debug!(turn = self.turns, action = action.as_str(), "processing action");

        match &action {
            GameAction::Magic { spell } => self.extras.magic(spell),
            GameAction::CheatCode { code } => self.extras.cheat_code(code),
            GameAction::Start { .. } | GameAction::Move { .. } => {}
        }

        let events = self.game.apply_action(&action)?;
        for event in &events {
            trace!(?event, "publish");
            for sink in &mut self.sinks {
                sink.publish(event);
            }
        }
        Ok(events)
    }
}

impl GameSession<SimpleRng> {
    /// Session seeded from `config.seed` (or `fallback_seed` when unset)
    pub fn from_config(config: &SessionConfig, fallback_seed: u32) -> Self {
        let seed = config.seed.unwrap_or(fallback_seed);
        Self::new(config, SimpleRng::new(seed))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::types::{Direction, GameStatus};

    fn session() -> GameSession {
        GameSession::new(&SessionConfig::default(), SimpleRng::new(3))
    }

    #[test]
    fn test_try_process_empty_queue() {
        let mut session = session();
        assert!(session.try_process_action().is_none());
        assert_eq!(session.turns(), 0);
    }

    #[test]
    fn test_one_action_per_call() {
        let mut session = session();
        session.queue_action(GameAction::Start {
            serialized_state: None,
        });
        session.queue_action(GameAction::Move {
            direction: Direction::Left,
        });

        let events = session.try_process_action().unwrap().unwrap();
        assert_eq!(events[0], GameEvent::GameStarted);
        assert_eq!(session.pending_actions().len(), 1);
        assert_eq!(session.game().status(), GameStatus::Running);
    }

    #[test]
    fn test_sinks_see_events_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut session = session();
        let log = Arc::clone(&seen);
        session.subscribe(move |event: &GameEvent| log.lock().unwrap().push(event.clone()));

        session.queue_action(GameAction::Start {
            serialized_state: None,
        });
        let events = session.try_process_action().unwrap().unwrap();
        assert_eq!(*seen.lock().unwrap(), events);
    }

    #[test]
    fn test_extra_actions_are_handed_off() {
        struct Recorder(Arc<Mutex<Vec<String>>>);

        impl ExtraActionHandler for Recorder {
            fn magic(&mut self, spell: &str) {
                self.0.lock().unwrap().push(format!("magic:{}", spell));
            }
            fn cheat_code(&mut self, code: &str) {
                self.0.lock().unwrap().push(format!("cheat:{}", code));
            }
        }

        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut session = session().with_extra_handler(Recorder(Arc::clone(&calls)));
        session.queue_action(GameAction::Magic {
            spell: "undo".to_string(),
        });
        session.queue_action(GameAction::CheatCode {
            code: "2048".to_string(),
        });

        assert!(session.try_process_action().unwrap().unwrap().is_empty());
        assert!(session.try_process_action().unwrap().unwrap().is_empty());
        assert_eq!(*calls.lock().unwrap(), vec!["magic:undo", "cheat:2048"]);
    }

    #[tokio::test]
    async fn test_process_action_waits_for_producer() {
        let mut session = session();
        let sender = session.sender();

        tokio::spawn(async move {
            tokio::task::yield_now().await;
            sender.push(GameAction::Start {
                serialized_state: None,
            });
        });

        let events = session.process_action().await.unwrap();
        assert_eq!(events[0], GameEvent::GameStarted);
        assert_eq!(session.turns(), 1);
    }
}
