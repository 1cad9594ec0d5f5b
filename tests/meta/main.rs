//! Structural checks keeping the unit test tree in step with the sources
