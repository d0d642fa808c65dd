//! Startup banner.

use crate::consts::{AUTHOR, REPO};

/// Session details for the startup banner.
pub struct BannerInfo<'a> {
    pub endpoint: &'a str,
    pub health: &'a str,
}

pub fn banner_text(info: &BannerInfo) -> String {
    format!(
        r#"
   ╔═══════════════════════════════════════╗
   ║             A S K D E S K             ║
   ║   enterprise knowledge, one question  ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   repo      {}
   agent     {}
   health    {}

   type a question, or /help for commands
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        REPO,
        info.endpoint,
        info.health,
    )
}

pub fn print_banner(info: &BannerInfo) {
    println!("{}", banner_text(info));
}
