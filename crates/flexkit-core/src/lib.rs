// crates/flexkit-core/src/lib.rs
pub mod cache;
pub mod node_ref;
pub mod properties;

pub use cache::*;
pub use node_ref::*;
pub use properties::*;

#[derive(Debug, thiserror::Error)]
pub enum FlexError {
    #[error("Unknown align value: {0}")]
    UnknownAlign(String),

    #[error("Unknown justify value: {0}")]
    UnknownJustify(String),

    #[error("Unknown direction value: {0}")]
    UnknownDirection(String),
}

pub type Result<T> = std::result::Result<T, FlexError>;
