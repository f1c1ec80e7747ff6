pub mod dispatcher;
pub mod error;
pub mod global;
pub mod handler;
pub mod provenance;
pub mod registry;
pub mod tokenizer;

pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use error::ChainError;
pub use global::Config;
pub use handler::{ActivationContext, Handler, RecordingHandler};
pub use provenance::{ProvenanceRecord, ProvenanceStore};
pub use registry::HandlerRegistry;
pub use tokenizer::{Tokenizer, tokenize};
