//! Legislative session: the draw/discard/enact flow and veto.

pub mod session;

pub use session::{check_discard, check_enact, Government, VetoStatus, DRAW_SIZE};
