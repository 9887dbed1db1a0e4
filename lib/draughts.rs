mod board;
mod color;
mod illegal;
mod r#match;
mod outcome;
mod path;
mod perspective;
mod piece;
mod role;
mod rules;
mod square;

pub use board::*;
pub use color::*;
pub use illegal::*;
pub use outcome::*;
pub use path::*;
pub use perspective::*;
pub use piece::*;
pub use r#match::*;
pub use role::*;
pub use rules::*;
pub use square::*;
