mod horizon;
mod quote;
mod series;
mod ticker;

pub use horizon::HorizonYears;
pub use quote::DailyQuote;
pub use series::{PriceSeries, TrainingFrame};
pub use ticker::Ticker;
