use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;
use crate::snippets::{self, BANNER};

#[derive(Debug, Serialize)]
struct BannerView {
    banner: &'static str,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    if ctx.output.mode() == OutputMode::Text {
        snippets::print_banner();
        return Ok(());
    }

    ctx.output.emit(BANNER, &BannerView { banner: BANNER })
}
