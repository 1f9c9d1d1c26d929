mod lookup;

pub use lookup::{LookupOutcome, LookupUseCase};
