//! Desktop shell notifier adapters

mod notifier;

pub use notifier::{ChannelShellNotifier, NoopShellNotifier, ShellCommand};
