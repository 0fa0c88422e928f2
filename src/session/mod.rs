/*!
 * Session state for an interactive diff view.
 *
 * Holds the current inputs and the last result, with compare and reset.
 */

pub mod manager;

pub use manager::DiffSession;
