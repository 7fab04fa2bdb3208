//! Index file format
//!
//! The index (staging area) is a text file with one line per staged change:
//!
//! ```text
//! <path> <40-char-address> <state-digit>\n
//! ```
//!
//! The last [`ENTRY_TAIL_LENGTH`] characters of a line are always the
//! separator, the address field, a space and the state digit; everything
//! before them is the path. Parsing by position from the end means paths may
//! contain spaces, or even text that looks like a tail, without ambiguity.
//!
//! A REMOVED entry has no blob, so its address field is [`REMOVED_SENTINEL`].

pub mod index_entry;

/// `" " + address + " " + digit`
pub const ENTRY_TAIL_LENGTH: usize = 43;

/// Address field of a REMOVED entry: 40 underscores
pub const REMOVED_SENTINEL: &str = "________________________________________";
