mod generate;
mod home;
mod system;
mod wordcount;

pub use generate::{form_config, generate_summary};
pub use home::index;
pub use system::health;
pub use wordcount::word_count;
