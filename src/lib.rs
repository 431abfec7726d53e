// Board file normalization: keep the first nine stripped lines of each board
pub mod board;
pub mod boards;
pub mod error;
pub mod normalize;
pub mod report;

pub use board::{BoardLines, BOARD_LINE_LIMIT, BOARD_LINE_SEPARATOR};
pub use error::BoardFileError;
pub use normalize::BoardNormalizer;
pub use report::{FileOutcome, RunSummary};
