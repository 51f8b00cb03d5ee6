mod hot_list;

pub use hot_list::{fetch_hot_list, render_hot_list};
