mod bar;
mod symbol;
mod timeframe;

pub use bar::Bar;
pub use symbol::Symbol;
pub use timeframe::Timeframe;
