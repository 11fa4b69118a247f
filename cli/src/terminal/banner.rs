use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
                          __                              __
      ____   ____  _____ / /_ _____ _____ ____   __  __ / /_
     / __ \ / __ \/ ___// __// ___// ___// __ \ / / / // __/
    / /_/ // /_/ / /   / /_ (__  )/ /__ / /_/ // /_/ // /_
   / .___/ \____/_/    \__//____/ \___/ \____/ \__,_/ \__/
  /_/
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_cyan()));
}
