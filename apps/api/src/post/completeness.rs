use serde::{Deserialize, Serialize};

use crate::models::{ActivityRecord, ActivityType};
use crate::post::schema::schema_for;

/// Fields of the activity schema that are still unanswered, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingInfo {
    pub essential: Vec<String>,
    pub optional: Vec<String>,
}

impl MissingInfo {
    /// Rendering is allowed once no essential field is missing.
    pub fn is_ready(&self) -> bool {
        self.essential.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.essential.is_empty() && self.optional.is_empty()
    }
}

pub fn check_missing_info(activity: ActivityType, record: &ActivityRecord) -> MissingInfo {
    let schema = schema_for(activity);
    let unanswered = |fields: &[&str]| -> Vec<String> {
        fields
            .iter()
            .filter(|f| !record.is_filled(f))
            .map(|f| f.to_string())
            .collect()
    };

    MissingInfo {
        essential: unanswered(schema.essential),
        optional: unanswered(schema.optional),
    }
}
