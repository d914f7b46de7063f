use serde::{Deserialize, Serialize};
use crate::structs::control_state::ControlState;
use crate::structs::figure::Figure;

/// Both charts recomputed for one control state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub state: ControlState,
    pub pie: Figure,
    pub scatter: Figure,
    pub matched_launches: usize,
}
