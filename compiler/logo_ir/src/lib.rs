//! Logo IR - the value model shared by the parser and the interpreter.
//!
//! Logo programs are data: the parser produces the same lists, words and
//! numbers that programs manipulate at runtime, and the interpreter walks
//! those values directly.
//!
//! - [`Atom`]: the closed sum of every value (`Number`, `Word`, `List`)
//! - [`Word`]: a symbol tagged with a [`WordKind`] (call, value, name, primitive)
//! - [`List`]: an immutable, cheaply cloned sequence, optionally a procedure
//! - [`PrimId`]: the identity token that makes primitive words unique
//!
//! # Equality
//!
//! Words compare by text regardless of kind, so `:x`, `'x` and `x` all name
//! the same binding. Primitive words are the exception: they compare by
//! [`PrimId`], so a user procedure never equals a built-in even when both
//! print the same. Lists compare by elements only; parameter lists and cached
//! source text are metadata.

mod atom;
mod list;
mod word;

pub use atom::{Atom, Number};
pub use list::List;
pub use word::{PrimId, Word, WordKind};
