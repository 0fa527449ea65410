#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use tracing_subscriber::EnvFilter;
use voyage_core::{Condition, Transform};

/// Shared recorder for hook and predicate activity. Cloning shares the
/// underlying log, so a closure can capture one half while the test asserts
/// on the other.
#[derive(Clone, Default)]
pub struct Recorder {
    entries: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: impl Into<String>) {
        self.entries.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

// Test Components
pub struct AddStage(pub i32);

pub struct MulStage(pub i32);

/// A predicate that never fires but counts how often it was consulted.
#[derive(Clone, Default)]
pub struct CountingCondition {
    calls: Rc<RefCell<usize>>,
}

impl CountingCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        *self.calls.borrow()
    }
}

// Implementations
impl Transform<i32> for AddStage {
    fn apply(&self, traveler: i32) -> i32 {
        traveler + self.0
    }
}

impl Transform<i32> for MulStage {
    fn apply(&self, traveler: i32) -> i32 {
        traveler * self.0
    }
}

impl Condition<i32> for CountingCondition {
    fn evaluate(&self, _traveler: &i32) -> bool {
        *self.calls.borrow_mut() += 1;
        false
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
