pub mod criteria;
pub mod filter;
pub mod form;
pub mod outcome;

pub use criteria::{ExactMatch, FilterCriteria};
pub use filter::filter;
pub use form::{FormField, SearchForm};
pub use outcome::{SearchOutcome, SearchReport};
