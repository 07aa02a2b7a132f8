mod reconstruct;
mod state;

pub use reconstruct::reconstruct_sessions;
pub use state::SessionState;
