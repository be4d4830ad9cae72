//! Input sources for scripted runs and the terminal event pump.

use super::{InputEvent, InputSource};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A fixed per-tick input trace. Yields nothing once exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: VecDeque<Option<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = Option<InputEvent>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Trace that is silent except for the given `(tick, event)` pairs.
    pub fn at_ticks(events: &[(usize, InputEvent)]) -> Self {
        let len = events.iter().map(|(tick, _)| tick + 1).max().unwrap_or(0);
        let mut script = vec![None; len];
        for &(tick, event) in events {
            script[tick] = Some(event);
        }
        Self::new(script)
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.script.pop_front().flatten()
    }
}

/// Shared FIFO filled by the event pump and drained one event per tick.
/// Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct QueuedInput {
    queue: Rc<RefCell<VecDeque<InputEvent>>>,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: InputEvent) {
        self.queue.borrow_mut().push_back(event);
    }

    pub fn clear(&self) {
        self.queue.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

impl InputSource for QueuedInput {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.queue.borrow_mut().pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_plays_trace_then_goes_quiet() {
        let mut input = ScriptedInput::new([None, Some(InputEvent::Flap), None]);
        assert_eq!(input.next_event(), None);
        assert_eq!(input.next_event(), Some(InputEvent::Flap));
        assert_eq!(input.next_event(), None);
        assert_eq!(input.remaining(), 0);
        assert_eq!(input.next_event(), None);
    }

    #[test]
    fn test_scripted_input_at_ticks() {
        let mut input =
            ScriptedInput::at_ticks(&[(2, InputEvent::Flap), (0, InputEvent::PauseToggle)]);
        assert_eq!(input.remaining(), 3);
        assert_eq!(input.next_event(), Some(InputEvent::PauseToggle));
        assert_eq!(input.next_event(), None);
        assert_eq!(input.next_event(), Some(InputEvent::Flap));
    }

    #[test]
    fn test_queued_input_shares_queue_between_clones() {
        let pump = QueuedInput::new();
        let mut source = pump.clone();
        pump.push(InputEvent::Flap);
        pump.push(InputEvent::Quit);
        assert_eq!(source.len(), 2);
        assert_eq!(source.next_event(), Some(InputEvent::Flap));
        assert_eq!(source.next_event(), Some(InputEvent::Quit));
        assert!(pump.is_empty());
    }

    #[test]
    fn test_closure_is_an_input_source() {
        let mut ticks = 0;
        let mut source = move || {
            ticks += 1;
            (ticks % 2 == 0).then_some(InputEvent::Flap)
        };
        assert_eq!(source.next_event(), None);
        assert_eq!(source.next_event(), Some(InputEvent::Flap));
    }
}
