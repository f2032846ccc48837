/// Development utilities
///
/// The mock client serves fixture data so the TUI and tests run without a
/// backend.

pub mod mock_client;
