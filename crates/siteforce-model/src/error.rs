#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Unsupported angle value: {angle_deg}. Expected [0, 90, 180, 270].")]
    UnsupportedRotation { angle_deg: f64 },

    #[error("offset rule {first}_{second} must be a positive finite distance, got {offset_m}")]
    NonPositiveOffset {
        first: uuid::Uuid,
        second: uuid::Uuid,
        offset_m: f64,
    },

    #[error("malformed offset rule key `{key}`: expected `<first-uuid>_<second-uuid>`")]
    InvalidRuleKey { key: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
