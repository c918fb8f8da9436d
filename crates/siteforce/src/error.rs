use siteforce_model::ModelError;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("no offset rule for building pair {first}_{second}")]
    MissingOffsetRule { first: Uuid, second: Uuid },

    #[error("cluster {cluster_id} has no buildings")]
    EmptyCluster { cluster_id: Uuid },
}

pub type Result<T> = std::result::Result<T, Error>;
