pub mod coverage;
pub mod interval;
pub mod presence;
pub mod punch;
pub mod work_order;
