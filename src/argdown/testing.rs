//! Testing utilities
//!
//! Verified Argdown snippets for tests, plus parse helpers that panic on
//! malformed fixtures. Argdown details are easy to get subtly wrong, and
//! a test tuned against an illegal snippet is worse than no test, so all
//! tests draw their sources from [`samples`] instead of scattering ad-hoc
//! strings through test files. Every sample is written in the canonical
//! form the serializer produces (four-space indents, single spaces before
//! inline data), which is what makes byte-exact assertions possible.

pub mod samples;
