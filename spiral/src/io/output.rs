use bedpack::io::ext_repr::{ExtJob, ExtPlacement};
use serde::{Deserialize, Serialize};

use crate::config::SpiralConfig;

/// Everything written to the solution file: the job as it was read, where every new box ended up and the config used
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SpiralOutput {
    #[serde(flatten)]
    pub job: ExtJob,
    /// One entry per new box, in the order of `newBoxes`
    pub placements: Vec<ExtPlacement>,
    pub config: SpiralConfig,
}
