//! Tests for the kinds of callables a task can wrap
