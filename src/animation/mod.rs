mod ripple;

pub use ripple::{Ripple, RipplePhase};
