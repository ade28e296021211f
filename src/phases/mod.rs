//! Implementation of the phases of argument resolution.
//!
//! ## Overview
//!
//! Resolution follows 4 phases:
//! 1. Command-Line Ingestion - Tokenize the arguments after the command
//! 2. Environment Overlay - Merge prefixed environment variables
//! 3. Config-File Overlay - Merge entries from the INI config file
//! 4. Serialization - Flatten the final set into the child's argv
//!
//! Each phase takes the set produced by the previous one, together with the
//! [`Sequencer`](crate::flagset::Sequencer) that numbers new entries. The
//! [`orchestrator`] runs phases 1-3 in that fixed order.

pub mod command_line;
pub mod config_file;
pub mod environment;
pub mod orchestrator;
pub mod serialize;

pub use command_line as phase1;
pub use config_file as phase3;
pub use environment as phase2;
pub use serialize as phase4;
