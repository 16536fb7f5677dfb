//! Static reference content: the playbook and the discovery toolkit

pub mod scripts;
pub mod toolkit;

pub use scripts::{day_scripts, value_props, DayScript, ValueProp};
pub use toolkit::{channels, x_search_url, Channel, DEFAULT_X_QUERY, SUBSTACK_EXPLORE_URL};
