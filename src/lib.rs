pub mod data;
pub mod state;

pub use data::loader::{load_dataset, LoadError};
pub use data::model::{Attribution, AwardDataset, Laureate, Prize, PrizeLaureate};
pub use data::query::QueryFilter;
pub use state::Selection;
