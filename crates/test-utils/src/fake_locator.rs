use std::collections::VecDeque;
use std::sync::Mutex;

use mdwatch::errors::Result;
use mdwatch::process::{Pid, ProcessLocator};

/// A fake locator that:
/// - returns one scripted answer per liveness check, in order
/// - keeps returning `None` once the script runs out (process gone).
#[derive(Debug, Default)]
pub struct FakeLocator {
    responses: Mutex<VecDeque<Option<Pid>>>,
}

impl FakeLocator {
    pub fn new(responses: impl IntoIterator<Item = Option<Pid>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }

    /// A locator that reports the process alive `polls` times, then gone.
    pub fn alive_for(pid: Pid, polls: usize) -> Self {
        Self::new(std::iter::repeat_n(Some(pid), polls))
    }

    /// A locator that never finds a process.
    pub fn never() -> Self {
        Self::default()
    }
}

impl ProcessLocator for FakeLocator {
    fn find_by_pattern(&self, _patterns: &[String]) -> Result<Option<Pid>> {
        let mut responses = self.responses.lock().unwrap();
        Ok(responses.pop_front().flatten())
    }
}
