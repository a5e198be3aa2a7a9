pub mod block_comment;
pub mod brace;
pub mod continuation;
pub mod keywords;
pub mod terminator;
pub mod triple_quote;

pub use block_comment::{BlockComment, CommentScan};
pub use brace::Brace;
pub use continuation::Continuation;
pub use keywords::Keywords;
pub use terminator::Terminator;
pub use triple_quote::{QuoteStyle, TripleQuote};
