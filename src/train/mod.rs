pub mod trainer;
pub mod report;
pub mod train_config;
pub mod loop_fn;

pub use trainer::train_sample;
pub use report::TrainReport;
pub use train_config::TrainConfig;
pub use loop_fn::train_loop;
