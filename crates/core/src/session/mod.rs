//! Recording-state mirroring toward the desktop shell

mod mirror;
pub mod ports;

pub use mirror::SessionMirror;
pub use ports::ShellNotifier;
