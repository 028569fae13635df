pub mod audit;
pub mod coverage;
pub mod improductive;
pub mod intervals;
pub mod normalize;
pub mod presence;
