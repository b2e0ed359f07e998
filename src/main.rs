// Native builds only load and report the embedded content; the page itself is wasm-only.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod content;
mod logging;
mod page;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use logging::LogLevel;
    use serde_json::json;

    let logger = config::RuntimeConfig::default().logger();

    match content::site_content() {
        Ok(site) => logger.event(
            LogLevel::Info,
            "content_loaded",
            json!({
                "owner": site.profile.name,
                "projects": site.projects.len(),
                "profiles": site.contact.profiles.len(),
                "sections": page::Region::ALL.map(page::Region::anchor_id),
            }),
        ),
        Err(error) => {
            logger.event(LogLevel::Warn, "content_invalid", json!({ "error": error.to_string() }));
            std::process::exit(1);
        }
    }

    eprintln!("The portfolio renders in the browser. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
