//! Public library API for converting typed records to and from JSON-shaped trees.

/// Archive walkers, field capability traits, and text entry points.
pub mod archive;
/// Sample records used by the `staticjson` binary and the test suites.
pub mod samples;
