//! Domain value types for algo streaming.
//!
//! Everything here is immutable after construction. Policy decisions
//! (quantity alternation, spread handling) live in the service layer;
//! these types accept their construction parameters as given.

mod errors;
mod price;
mod product;
mod stream;

pub use errors::StreamingError;
pub use price::PriceUpdate;
pub use product::ProductId;
pub use stream::{AlgoStream, PriceStream, QuoteOrder, Side};
