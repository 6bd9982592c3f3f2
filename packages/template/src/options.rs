use serde::{Deserialize, Serialize};

pub use crate::id_generator::IdPolicy;

/// Options for one compilation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOptions {
    #[serde(default)]
    pub id_policy: IdPolicy,
}

impl CompileOptions {
    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }
}
