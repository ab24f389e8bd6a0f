use crate::config::TlvConfig;
use serde::{Deserialize, Serialize};
use tiler::io::ext_repr::{ExtInstance, ExtSolution};

#[derive(Serialize, Deserialize, Clone)]
pub struct TlvOutput {
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: TlvConfig,
}
