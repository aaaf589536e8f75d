mod command;
mod console;
pub use command::*;
pub use console::*;
