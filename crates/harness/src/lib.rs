pub mod error;
pub mod input;
pub mod options;
pub mod round;
pub mod stage;

pub use error::HarnessError;
pub use input::ChainReader;
pub use options::{Options, SpaceKind};
pub use round::{Comparison, Relation, Round, standard_rounds};
pub use stage::StageHarness;
