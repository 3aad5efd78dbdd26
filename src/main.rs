#[macro_use]
extern crate log;

use pattern_pages::{build_config, stdout_console, OrLog, PageContext};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let conf = match build_config(std::env::args().collect()) {
        Ok(conf) => conf,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    if conf.happy_exit {
        return;
    }

    info!("running {} page(s)", conf.pages.len());
    let ctx = PageContext::new(stdout_console(), &conf);
    for page in &conf.pages {
        debug!("running {} page", page);
        page.run(&ctx)
            .or_log_error(&format!("{} page failed", page));
    }
}
