//! UI abstraction layer
//!
//! The find command talks to the listener only through these traits, so the
//! same loop runs against dialoguer prompts in a terminal and against a
//! scripted input in tests.
//!
//! - **`UserInput`** - prompts (confirmation, selection, text)
//! - **`OutputWriter`** - status messages with severity levels
//! - **`PlaybackTransport`** - hands the probe to something that can play it

pub mod input;
pub mod mock;
pub mod output;
pub mod playback;

pub use input::{DialoguerInput, InputError, UserInput};
pub use mock::ScriptedInput;
pub use output::{BufferedWriter, MessageLevel, OutputWriter, StdoutWriter};
pub use playback::{NoPlayback, PlaybackTransport, SystemPlayer};
