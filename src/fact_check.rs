//! A place to validate intuitions about paths. Tests
//! check std::path behavior that the segment extraction relies on.
