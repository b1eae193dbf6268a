mod ini_file;
mod section;
mod timer_sections;

pub use ini_file::{GLOBAL_SECTION_NAME, IniFile};
pub use section::IniSection;
pub use timer_sections::TimerSections;
