//! Default board set. Boards 01, 02 and 10 are not part of the collection.

pub const DEFAULT_BOARD_COUNT: usize = 47;

/// `03.txt`..`09.txt` then `11.txt`..`50.txt`, in processing order.
pub fn default_board_names() -> Vec<String> {
    (3..=9).chain(11..=50).map(|n: u32| format!("{:02}.txt", n)).collect()
}
