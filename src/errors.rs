use generational_arena::Index;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("no free child slot under '{0}'")]
    SlotsFull(String),

    #[error("stale node handle: {0:?}")]
    StaleHandle(Index),
}

pub type TreeResult<T> = Result<T, TreeError>;
