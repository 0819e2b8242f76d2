mod application;

mod presentation {
    pub mod cli;
}

use hexcmp_core::error::Result;

fn main() -> Result<()> {
    application::run()
}
