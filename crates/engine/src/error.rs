use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("the population is empty; nothing to analyze")]
    EmptyPopulation,

    #[error("duplicate entry id '{0}' within one run; identities must be unique")]
    DuplicateEntryId(String),

    #[error("none of the {total} entries were eligible under the dimension set")]
    NoEligibleEntries { total: usize },

    #[error("Layering failed: {0}")]
    Layering(#[from] layering::error::LayeringError),

    #[error("Sub-frontier analysis failed: {0}")]
    SubFrontier(#[from] subfrontier::SubFrontierError),

    #[error("Graph construction failed: {0}")]
    Graph(#[from] graph::error::GraphError),

    #[error("Percentile calculation failed: {0}")]
    Percentile(#[from] percentile::error::PercentileError),
}
