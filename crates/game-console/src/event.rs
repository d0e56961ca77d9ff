//! Events reported back to the host by a console tick.

/// Things that happened during one [`Console::update`](crate::Console::update).
///
/// The console never acts on these itself; they are for the host (status
/// bars, command interpreters, logging).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    /// A pending read was committed and the text moved into the scrollback.
    InputCommitted(String),
    /// Enter was observed while no read was pending; the request was dropped.
    CommitDiscarded,
    /// This many of the oldest lines were evicted to respect the capacity.
    LinesEvicted(usize),
}
