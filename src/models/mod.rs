pub mod execution;
pub mod metadata;

pub use execution::{ExecutionResponse, SerializableTransaction};
pub use metadata::{
    Action, ActionParam, ChainContext, DynamicAction, Metadata, ParamType, ValidatedMetadata,
};
