pub use assignment::*;
pub use bank::*;
pub use board::*;
pub use cells_set::*;
pub use chance::*;
pub use errors::*;
pub use lines::*;
pub use question::*;
pub use session::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod assignment;
mod bank;
mod bitset;
mod board;
mod cells_set;
mod chance;
mod errors;
mod lines;
mod question;
mod session;
mod visualization;
