mod utils;

mod test_concurrent;
mod test_levels;
