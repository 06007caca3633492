//! Unit tests for the verify resource
