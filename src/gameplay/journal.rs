use super::event::Event;
use crate::JOURNAL_CAPACITY;
use std::collections::VecDeque;

/// Bounded event log, newest first.
#[derive(Debug, Default, Clone)]
pub struct Journal(VecDeque<Event>);

impl Journal {
    /// Appends events in the order they happened. Once full, the oldest
    /// entries fall off the back.
    pub fn record(&mut self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.0.push_front(event);
        }
        self.0.truncate(JOURNAL_CAPACITY);
    }
    pub fn latest(&self) -> Option<&Event> {
        self.0.front()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first() {
        let mut journal = Journal::default();
        journal.record([Event::info("first"), Event::info("second")]);
        journal.record([Event::info("third")]);
        let messages = journal.iter().map(Event::message).collect::<Vec<_>>();
        assert_eq!(messages, vec!["third", "second", "first"]);
    }

    #[test]
    fn bounded() {
        let mut journal = Journal::default();
        journal.record((0..JOURNAL_CAPACITY + 25).map(|i| Event::info(i.to_string())));
        assert_eq!(journal.len(), JOURNAL_CAPACITY);
        let newest = (JOURNAL_CAPACITY + 24).to_string();
        assert_eq!(journal.latest().map(Event::message), Some(newest.as_str()));
        assert_eq!(journal.iter().last().map(Event::message), Some("25"));
    }
}
