pub mod paths;
pub mod patch;
pub mod prompt;
pub mod report;
pub mod scan;
pub mod wire;
